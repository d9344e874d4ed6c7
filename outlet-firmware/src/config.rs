// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use outlet_core::OutletConfig;

// ============================================================================
// Steckdosen Konfiguration
// ============================================================================

/// Anzahl der Steckdosen auf der Platine
/// Bestimmt auch die Pool-Größe der Embassy Tasks
pub const OUTLET_COUNT: usize = 4;

/// Dauer in Sekunden, ab der ein Tastendruck als "lang" gilt
pub const LONG_PRESS_DURATION_SECS: u64 = 1;

/// Auto-Off nach dieser Zeit in Minuten
/// 0 = kein Timer, Einschalten geht direkt in den Halte-Modus
pub const AUTO_TURN_OFF_MINS: u64 = 30;

/// Diagnose-Ausgaben (Zustandswechsel, Druckdauer, Auto-Off)
pub const DEBUG: bool = true;

/// Gemeinsame Konfiguration aller Steckdosen
pub const OUTLET_CONFIG: OutletConfig =
    OutletConfig::new(LONG_PRESS_DURATION_SECS, AUTO_TURN_OFF_MINS, DEBUG);

// ============================================================================
// GPIO-Zuordnung
// ============================================================================
//
// | Steckdose | LED    | Taste  | Relais |
// |-----------|--------|--------|--------|
// | 1         | GPIO7  | GPIO0  | GPIO8  |
// | 2         | GPIO4  | GPIO1  | GPIO9  |
// | 3         | GPIO5  | GPIO2  | GPIO10 |
// | 4         | GPIO6  | GPIO3  | GPIO11 |
//
// Tasten sind Low-aktiv mit internem Pull-Up.
// GPIO8/GPIO9 sind Strapping-Pins: Relais-Treiber dürfen beim Boot keinen
// Pegel erzwingen.
