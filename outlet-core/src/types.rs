//! Core Types für die Steckdosen-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Eindeutige Kennung einer Steckdose
///
/// Wird beim Bootstrap explizit vergeben (kein globaler Zähler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutletId(pub u8);

/// Zustand einer Steckdose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutletState {
    /// Relais aus, LED aus
    #[default]
    Off,
    /// Relais an, Auto-Off-Timer läuft
    OnTimed,
    /// Relais an, kein Timer, LED blinkt dauerhaft
    OnHeld,
}

impl OutletState {
    /// `true` für beide "An"-Zustände
    pub fn is_on(self) -> bool {
        self != Self::Off
    }
}

/// Ergebnis der Flanken-Erfassung (Interrupt-Phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Flanke akzeptiert, Tastendruck wird vermessen
    Accepted,
    /// Flanke liegt im Entprell-Fenster
    Debounced,
    /// Es wird bereits ein Tastendruck vermessen
    PressInProgress,
}

/// Ende eines Tastendrucks (Task-Phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEnd {
    /// Steigende Flanke zum Zeitpunkt `at_ms`
    Released { at_ms: u64 },
    /// Taste länger als die Obergrenze gedrückt (z.B. klemmt)
    CeilingReached,
}

/// Klassifiziertes Tasten-Ereignis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Kein offener Tastendruck
    Ignored,
    /// Kürzer als `MIN_PRESS_MS` - Kontaktprellen
    Bounce,
    ShortPress,
    LongPress,
    /// Obergrenze erreicht, wird wie ein langer Druck behandelt
    HeldBeyondCeiling,
}

/// Auslöser eines Zustandswechsels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionCause {
    Startup,
    ShortPress,
    LongPress,
    StuckButton,
    AutoOff,
    ForcedOn,
    ForcedOff,
}

/// Zustandswechsel einer Steckdose (für Diagnose-Ausgaben und Tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: OutletState,
    pub to: OutletState,
    pub cause: TransitionCause,
}

/// Bericht über einen vollständig ausgewerteten Tastendruck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressReport {
    pub event: ButtonEvent,
    /// Gemessene Dauer, `None` wenn die Obergrenze erreicht wurde
    pub duration_ms: Option<u64>,
    pub transition: Option<Transition>,
}

/// Ticket eines scharf geschalteten Auto-Off-Timers
///
/// Ein Ablauf mit veraltetem Ticket wird verworfen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerTicket(pub u32);

/// Handle eines laufenden Blink-Tasks
///
/// Nach `cancel` ist das Handle veraltet; Schreibzugriffe damit werden ignoriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkHandle(pub u32);

/// Token einer laufenden Warn-Sequenz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WarningToken(pub u32);

/// Ein Schritt eines Blink-Musters: LED-Pegel und Haltezeit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkStep {
    pub level: bool,
    pub hold_ms: u64,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Transition {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} -> {} ({})", self.from, self.to, self.cause)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PressReport {
    fn format(&self, fmt: defmt::Formatter) {
        match self.duration_ms {
            Some(ms) => defmt::write!(fmt, "{} nach {} ms", self.event, ms),
            None => defmt::write!(fmt, "{} (Obergrenze erreicht)", self.event),
        }
    }
}
