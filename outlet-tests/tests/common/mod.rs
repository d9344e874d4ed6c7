//! Mock-Hardware für Host-Tests
//!
//! Ersetzt GPIO, Timer-Dienst und Blink-Laufzeit durch In-Memory Mocks.

#![allow(dead_code)]

use outlet_core::{
    AutoOffTimer, BlinkHandle, BlinkRuntime, EdgeOutcome, LineError, OutletConfig,
    OutletController, OutletId, OutletState, OutputLine, PressEnd, PressReport, TimerTicket,
    warning_steps,
};

// ============================================================================
// Mock Output Line
// ============================================================================

#[derive(Default)]
pub struct MockLine {
    pub level: Option<bool>,
    pub history: Vec<bool>,
    /// Schreibzugriff Nr. `n` (0-basiert) schlägt fehl
    pub fail_at_write: Option<usize>,
    attempts: usize,
}

impl MockLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(write: usize) -> Self {
        Self {
            fail_at_write: Some(write),
            ..Self::default()
        }
    }

    pub fn is_high(&self) -> bool {
        self.level == Some(true)
    }
}

impl OutputLine for MockLine {
    fn set(&mut self, high: bool) -> Result<(), LineError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at_write == Some(attempt) {
            return Err(LineError::WriteFailed);
        }

        self.level = Some(high);
        self.history.push(high);
        Ok(())
    }
}

// ============================================================================
// Mock Timer
// ============================================================================

#[derive(Default)]
pub struct MockTimer {
    pub armed: Option<(TimerTicket, u64)>,
    pub arm_count: usize,
    pub disarm_count: usize,
}

impl AutoOffTimer for MockTimer {
    fn arm(&mut self, ticket: TimerTicket, after_ms: u64) {
        self.armed = Some((ticket, after_ms));
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = None;
        self.disarm_count += 1;
    }
}

// ============================================================================
// Mock Blink Runtime
// ============================================================================

#[derive(Default)]
pub struct MockBlink {
    pub running: Option<BlinkHandle>,
    pub spawned: Vec<BlinkHandle>,
    pub cancelled: Vec<BlinkHandle>,
}

impl BlinkRuntime for MockBlink {
    fn spawn(&mut self, handle: BlinkHandle) {
        assert!(
            self.running.is_none(),
            "Blink-Task läuft bereits: {:?}",
            self.running
        );
        self.running = Some(handle);
        self.spawned.push(handle);
    }

    fn cancel(&mut self, handle: BlinkHandle) {
        if self.running == Some(handle) {
            self.running = None;
        }
        self.cancelled.push(handle);
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestOutlet = OutletController<MockLine, MockLine, MockTimer, MockBlink>;

pub fn outlet(config: OutletConfig) -> TestOutlet {
    OutletController::new(
        OutletId(1),
        config,
        MockLine::new(),
        MockLine::new(),
        MockTimer::default(),
        MockBlink::default(),
    )
    .unwrap()
}

pub fn default_outlet() -> TestOutlet {
    outlet(OutletConfig::default())
}

/// Kompletter Tastendruck: fallende Flanke bei `at_ms`, Loslassen nach `duration_ms`
///
/// Gibt `None` zurück, wenn die Flanke nicht akzeptiert wurde.
pub fn press(outlet: &mut TestOutlet, at_ms: u64, duration_ms: u64) -> Option<PressReport> {
    match outlet.on_falling_edge(at_ms) {
        EdgeOutcome::Accepted => Some(
            outlet
                .on_press_end(PressEnd::Released {
                    at_ms: at_ms + duration_ms,
                })
                .unwrap(),
        ),
        EdgeOutcome::Debounced | EdgeOutcome::PressInProgress => None,
    }
}

/// Lässt den Auto-Off-Timer ablaufen und spielt die Warn-Sequenz ab
///
/// Gibt die Anzahl der LED-Einschaltungen während der Warnung zurück.
pub fn expire_timer(outlet: &mut TestOutlet) -> usize {
    let (ticket, _) = outlet.timer().armed.expect("Timer nicht scharf");
    let token = outlet
        .on_auto_off_expired(ticket)
        .expect("Ticket ist veraltet");

    let mut blinks = 0;
    for step in warning_steps() {
        assert!(outlet.warning_write(token, step.level).unwrap());
        assert!(outlet.relay().is_high(), "Relais bleibt während der Warnung an");
        if step.level {
            blinks += 1;
        }
    }
    outlet.finish_warning(token).unwrap();
    blinks
}

/// Prüft die Invarianten zwischen Zustand, Ausgängen, Timer und Blink-Task
pub fn assert_invariants(outlet: &TestOutlet) {
    let state = outlet.state();

    assert_eq!(outlet.relay().is_high(), state.is_on(), "Relais passt nicht zu {state:?}");
    if state == OutletState::Off {
        assert!(!outlet.led().is_high(), "LED an, obwohl aus");
    }

    assert!(
        !(outlet.timer_armed() && outlet.blink_handle().is_some()),
        "Timer und Blink-Task gleichzeitig aktiv"
    );
    assert_eq!(outlet.timer_armed(), state == OutletState::OnTimed && !outlet.warning_active());
    assert_eq!(outlet.blink_handle().is_some(), state == OutletState::OnHeld);

    assert_eq!(outlet.timer().armed.map(|(t, _)| t), outlet.armed_ticket());
    assert_eq!(outlet.blink_runtime().running, outlet.blink_handle());
}
