// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul bindet GPIO und Embassy-Signale an die Traits aus
// outlet-core, damit die Zustandsmaschine hardwarefrei bleibt.

pub mod gpio_line;
pub mod signals;

pub use gpio_line::GpioLine;
pub use signals::{SignalBlink, SignalTimer};
