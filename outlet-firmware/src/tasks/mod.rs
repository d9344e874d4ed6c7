// Task-Modul: Enthält alle Embassy Tasks
//
// Pro Steckdose laufen drei Tasks (Taste, Auto-Off, Blinken).
// Sie teilen sich den Controller über `SharedOutlet`; der Controller
// steuert Auto-Off- und Blink-Task über Signals.

pub mod auto_off;
pub mod blink;
pub mod button;

// Re-export Tasks für einfachen Import
pub use auto_off::auto_off_task;
pub use blink::blink_task;
pub use button::button_task;

use defmt::info;
use outlet_core::{OutletId, Transition};

/// Diagnose-Ausgabe eines Zustandswechsels
pub(crate) fn log_transition(id: OutletId, transition: &Transition) {
    info!("Steckdose {}: {}", id.0, transition);
}
