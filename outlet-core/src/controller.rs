//! Zustandsmaschine einer Steckdose
//!
//! Der Controller besitzt LED, Relais, Auto-Off-Timer und Blink-Laufzeit.
//! Alle mutierenden Methoden nehmen `&mut self`: exklusiver Zugriff ist
//! Sache des Aufrufers (Firmware: Critical-Section-Mutex). Damit ist jeder
//! Zustandswechsel samt Timer- und Task-Verwaltung atomar.
//!
//! Timer und Blink-Task tragen Generations-Handles. Nach einem Wechsel
//! sind alte Handles ungültig, verspätete Aufrufe schreiben nichts mehr.

use crate::classifier::PressClassifier;
use crate::config::OutletConfig;
use crate::traits::{AutoOffTimer, BlinkRuntime, LineError, OutputLine};
use crate::types::{
    BlinkHandle, ButtonEvent, EdgeOutcome, OutletId, OutletState, PressEnd, PressReport,
    TimerTicket, Transition, TransitionCause, WarningToken,
};

pub struct OutletController<L, R, T, B> {
    id: OutletId,
    config: OutletConfig,
    state: OutletState,
    classifier: PressClassifier,
    led: L,
    relay: R,
    timer: T,
    blink: B,
    generation: u32,
    armed_ticket: Option<TimerTicket>,
    blink_handle: Option<BlinkHandle>,
    warning: Option<WarningToken>,
}

impl<L, R, T, B> OutletController<L, R, T, B>
where
    L: OutputLine,
    R: OutputLine,
    T: AutoOffTimer,
    B: BlinkRuntime,
{
    /// Erstellt den Controller und schaltet die Steckdose aus
    pub fn new(
        id: OutletId,
        config: OutletConfig,
        led: L,
        relay: R,
        timer: T,
        blink: B,
    ) -> Result<Self, LineError> {
        let mut outlet = Self {
            id,
            config,
            state: OutletState::Off,
            classifier: PressClassifier::new(config.long_press_threshold_ms),
            led,
            relay,
            timer,
            blink,
            generation: 0,
            armed_ticket: None,
            blink_handle: None,
            warning: None,
        };
        outlet.turn_off_with(TransitionCause::Startup)?;
        Ok(outlet)
    }

    pub fn id(&self) -> OutletId {
        self.id
    }

    pub fn state(&self) -> OutletState {
        self.state
    }

    pub fn config(&self) -> &OutletConfig {
        &self.config
    }

    pub fn timer_armed(&self) -> bool {
        self.armed_ticket.is_some()
    }

    pub fn armed_ticket(&self) -> Option<TimerTicket> {
        self.armed_ticket
    }

    pub fn blink_handle(&self) -> Option<BlinkHandle> {
        self.blink_handle
    }

    pub fn warning_active(&self) -> bool {
        self.warning.is_some()
    }

    pub fn last_press_ms(&self) -> Option<u64> {
        self.classifier.last_press_ms()
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn blink_runtime(&self) -> &B {
        &self.blink
    }

    // ------------------------------------------------------------------------
    // Tasten-Pfad
    // ------------------------------------------------------------------------

    /// Fallende Flanke erfassen (schnell, ohne Warten)
    pub fn on_falling_edge(&mut self, now_ms: u64) -> EdgeOutcome {
        self.classifier.on_falling_edge(now_ms)
    }

    /// Offenen Tastendruck auswerten und den Zustand anpassen
    pub fn on_press_end(&mut self, end: PressEnd) -> Result<PressReport, LineError> {
        let (event, duration_ms) = self.classifier.resolve(end);

        let transition = match event {
            ButtonEvent::Ignored | ButtonEvent::Bounce => None,
            ButtonEvent::ShortPress => Some(self.toggle_with(TransitionCause::ShortPress)?),
            ButtonEvent::LongPress => Some(self.enter_held(TransitionCause::LongPress)?),
            ButtonEvent::HeldBeyondCeiling => {
                Some(self.enter_held(TransitionCause::StuckButton)?)
            }
        };

        Ok(PressReport {
            event,
            duration_ms,
            transition,
        })
    }

    // ------------------------------------------------------------------------
    // Direkte Kommandos
    // ------------------------------------------------------------------------

    /// Aus → An (mit Timer), sonst → Aus
    pub fn toggle(&mut self) -> Result<Transition, LineError> {
        self.toggle_with(TransitionCause::ShortPress)
    }

    /// Einschalten
    ///
    /// - `None`: konfigurierte Auto-Off-Dauer
    /// - `Some(0)`: Halte-Modus ohne Timer
    /// - `Some(ms)`: Auto-Off nach `ms`
    pub fn turn_on(&mut self, timer_ms: Option<u64>) -> Result<Transition, LineError> {
        self.turn_on_with(timer_ms, TransitionCause::ForcedOn)
    }

    /// Halte-Modus erzwingen (entspricht `turn_on(Some(0))`)
    pub fn force_held(&mut self) -> Result<Transition, LineError> {
        self.enter_held(TransitionCause::ForcedOn)
    }

    pub fn turn_off(&mut self) -> Result<Transition, LineError> {
        self.turn_off_with(TransitionCause::ForcedOff)
    }

    // ------------------------------------------------------------------------
    // Timer-Pfad
    // ------------------------------------------------------------------------

    /// Callback des Auto-Off-Timers
    ///
    /// Startet die Warn-Sequenz, wenn das Ticket noch gültig ist.
    /// Der Zustand bleibt `OnTimed`, das Relais bleibt an.
    pub fn on_auto_off_expired(&mut self, ticket: TimerTicket) -> Option<WarningToken> {
        if self.armed_ticket != Some(ticket) {
            return None;
        }

        self.armed_ticket = None;
        self.timer.disarm();

        let token = WarningToken(self.next_generation());
        self.warning = Some(token);
        Some(token)
    }

    /// Ein Schritt der Warn-Sequenz; `false` wenn sie abgebrochen wurde
    pub fn warning_write(&mut self, token: WarningToken, level: bool) -> Result<bool, LineError> {
        if self.warning != Some(token) {
            return Ok(false);
        }
        self.led.set(level)?;
        Ok(true)
    }

    /// Warn-Sequenz beenden und ausschalten
    pub fn finish_warning(&mut self, token: WarningToken) -> Result<Option<Transition>, LineError> {
        if self.warning != Some(token) {
            return Ok(None);
        }
        self.turn_off_with(TransitionCause::AutoOff).map(Some)
    }

    // ------------------------------------------------------------------------
    // Blink-Pfad
    // ------------------------------------------------------------------------

    /// LED-Schreibzugriff des Blink-Tasks; `false` bei veraltetem Handle
    pub fn blink_write(&mut self, handle: BlinkHandle, level: bool) -> Result<bool, LineError> {
        if self.blink_handle != Some(handle) {
            return Ok(false);
        }
        self.led.set(level)?;
        Ok(true)
    }

    // ------------------------------------------------------------------------
    // Zustandswechsel
    // ------------------------------------------------------------------------

    fn toggle_with(&mut self, cause: TransitionCause) -> Result<Transition, LineError> {
        if self.state.is_on() {
            self.turn_off_with(cause)
        } else {
            self.turn_on_with(None, cause)
        }
    }

    fn turn_on_with(
        &mut self,
        timer_ms: Option<u64>,
        cause: TransitionCause,
    ) -> Result<Transition, LineError> {
        let duration = timer_ms.unwrap_or(self.config.auto_off_ms);
        if duration == 0 {
            return self.enter_held(cause);
        }

        self.stop_async_work();
        let transition = self.transition(OutletState::OnTimed, cause);

        let ticket = TimerTicket(self.next_generation());
        self.armed_ticket = Some(ticket);
        self.timer.arm(ticket, duration);

        self.write_outputs(true)?;
        Ok(transition)
    }

    fn enter_held(&mut self, cause: TransitionCause) -> Result<Transition, LineError> {
        self.stop_async_work();
        let transition = self.transition(OutletState::OnHeld, cause);

        let handle = BlinkHandle(self.next_generation());
        self.blink_handle = Some(handle);
        self.blink.spawn(handle);

        self.write_outputs(true)?;
        Ok(transition)
    }

    fn turn_off_with(&mut self, cause: TransitionCause) -> Result<Transition, LineError> {
        // Blink-Handle muss ungültig sein, bevor die LED geschrieben wird
        self.stop_async_work();
        let transition = self.transition(OutletState::Off, cause);
        self.write_outputs(false)?;
        Ok(transition)
    }

    /// Timer entschärfen, Blink-Task und Warn-Sequenz abbrechen
    fn stop_async_work(&mut self) {
        if self.armed_ticket.take().is_some() {
            self.timer.disarm();
        }
        if let Some(handle) = self.blink_handle.take() {
            self.blink.cancel(handle);
        }
        self.warning = None;
    }

    fn transition(&mut self, to: OutletState, cause: TransitionCause) -> Transition {
        let from = self.state;
        self.state = to;
        Transition { from, to, cause }
    }

    fn write_outputs(&mut self, on: bool) -> Result<(), LineError> {
        self.relay.set(on)?;
        self.led.set(on)
    }

    fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
