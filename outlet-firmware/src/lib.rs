// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von outlet-core
pub use outlet_core::{
    BlinkHandle, OutletConfig, OutletController, OutletId, OutletState, TimerTicket, Transition,
};

use core::cell::RefCell;

// Embassy Sync-Typen
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::hal::{GpioLine, SignalBlink, SignalTimer};

// ============================================================================
// Kommandos an die Tasks einer Steckdose
// ============================================================================

/// Kommando an den Auto-Off-Task
#[derive(Clone, Copy, defmt::Format)]
pub enum TimerCommand {
    /// Nach `after_ms` mit `ticket` ablaufen
    Arm { ticket: TimerTicket, after_ms: u64 },
    Disarm,
}

/// Kommando an den Blink-Task
#[derive(Clone, Copy, defmt::Format)]
pub enum BlinkCommand {
    Start(BlinkHandle),
    Cancel(BlinkHandle),
}

// ============================================================================
// Type-Aliase
// ============================================================================
//
// Statt:  Mutex<CriticalSectionRawMutex, RefCell<OutletController<GpioLine, ...>>>
// Nutze:  SharedOutlet

/// Controller mit echter Hardware
pub type FirmwareController = OutletController<GpioLine, GpioLine, SignalTimer, SignalBlink>;

/// Controller einer Steckdose, geteilt zwischen Tasten-, Timer- und Blink-Task
///
/// CriticalSectionRawMutex: jeder Zugriff läuft mit gesperrten Interrupts,
/// Zustandswechsel sind damit atomar gegenüber allen drei Kontexten.
pub type SharedOutlet = Mutex<CriticalSectionRawMutex, RefCell<FirmwareController>>;

/// Signal für Timer-Kommandos (Controller → auto_off_task)
pub type TimerSignal = Signal<CriticalSectionRawMutex, TimerCommand>;

/// Signal für Blink-Kommandos (Controller → blink_task)
pub type BlinkSignal = Signal<CriticalSectionRawMutex, BlinkCommand>;

/// Führt `f` mit exklusivem Zugriff auf den Controller aus
///
/// `f` darf nicht warten: der Mutex hält eine Critical Section.
pub fn with_outlet<T>(outlet: &SharedOutlet, f: impl FnOnce(&mut FirmwareController) -> T) -> T {
    outlet.lock(|cell| f(&mut cell.borrow_mut()))
}
