//! Outlet Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und die Zustandsmaschine einer
//! geschalteten Steckdose (Taste, LED, Relais).

#![no_std]

pub mod classifier;
pub mod config;
pub mod controller;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use classifier::PressClassifier;
pub use config::OutletConfig;
pub use controller::OutletController;
pub use logic::{classify_duration, elapsed_ms, held_blink_step, warning_steps};
pub use traits::{AutoOffTimer, BlinkRuntime, LineError, OutputLine};
pub use types::{
    BlinkHandle, BlinkStep, ButtonEvent, EdgeOutcome, OutletId, OutletState, PressEnd,
    PressReport, TimerTicket, Transition, TransitionCause, WarningToken,
};
