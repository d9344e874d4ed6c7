//! Zeitkonstanten und Konfiguration einer Steckdose

/// Entprell-Fenster: Mindestabstand zwischen zwei akzeptierten Flanken
pub const DEBOUNCE_WINDOW_MS: u64 = 500;

/// Kürzere Tastendrücke gelten als Prellen
pub const MIN_PRESS_MS: u64 = 50;

/// Obergrenze für die Vermessung eines Tastendrucks
pub const PRESS_CEILING_MS: u64 = 1000;

/// Anzahl der Warn-Blinks vor der automatischen Abschaltung
pub const WARNING_BLINKS: usize = 10;

/// Halbe Periode eines Warn-Blinks (100 ms an + 100 ms aus)
pub const WARNING_HALF_PERIOD_MS: u64 = 100;

/// Halbe Periode des Dauer-Blinkens im Halte-Modus (1 Hz)
pub const HELD_BLINK_HALF_PERIOD_MS: u64 = 500;

/// Konfiguration einer Steckdose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutletConfig {
    /// Grenze zwischen kurzem und langem Druck
    pub long_press_threshold_ms: u64,
    /// Dauer bis zur automatischen Abschaltung; 0 = Halte-Modus statt Timer
    pub auto_off_ms: u64,
    /// Obergrenze für die Vermessung eines Tastendrucks
    pub press_ceiling_ms: u64,
    /// Diagnose-Ausgaben aktivieren
    pub debug: bool,
}

impl OutletConfig {
    /// Erstellt eine Konfiguration aus Sekunden bzw. Minuten
    pub const fn new(long_press_duration_sec: u64, auto_turn_off_time_mins: u64, debug: bool) -> Self {
        Self {
            long_press_threshold_ms: long_press_duration_sec * 1000,
            auto_off_ms: auto_turn_off_time_mins * 60 * 1000,
            press_ceiling_ms: PRESS_CEILING_MS,
            debug,
        }
    }

    pub const fn with_press_ceiling_ms(mut self, press_ceiling_ms: u64) -> Self {
        self.press_ceiling_ms = press_ceiling_ms;
        self
    }
}

impl Default for OutletConfig {
    fn default() -> Self {
        Self::new(1, 30, false)
    }
}
