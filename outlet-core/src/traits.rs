//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstellen zu GPIO, Timer-Dienst und
//! kooperativer Laufzeit ohne konkrete Implementierung.

use crate::types::{BlinkHandle, TimerTicket};

/// Fehler-Typ für Ausgangs-Leitungen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    WriteFailed,
}

/// Trait für eine digitale Ausgangs-Leitung (LED oder Relais)
///
/// # Implementierungen
/// - **Production:** GpioLine (esp-hal `Output`)
/// - **Testing:** MockLine (in-memory Mock)
pub trait OutputLine: Send {
    /// Setzt den Pegel der Leitung
    ///
    /// # Fehlerbehandlung
    /// Gibt `LineError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set(&mut self, high: bool) -> Result<(), LineError>;
}

/// Einmal-Timer für die automatische Abschaltung
///
/// Nach `after_ms` muss der Dienst `OutletController::on_auto_off_expired`
/// mit demselben Ticket aufrufen.
pub trait AutoOffTimer: Send {
    fn arm(&mut self, ticket: TimerTicket, after_ms: u64);
    fn disarm(&mut self);
}

/// Kooperative Laufzeit für den Dauer-Blink-Task
///
/// Der Task ruft `OutletController::blink_write` mit seinem Handle auf.
/// `cancel` darf asynchron wirken: das Handle ist im Controller bereits
/// ungültig, bevor `cancel` aufgerufen wird.
pub trait BlinkRuntime: Send {
    fn spawn(&mut self, handle: BlinkHandle);
    fn cancel(&mut self, handle: BlinkHandle);
}
