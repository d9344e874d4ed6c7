// GPIO-Ausgang als OutputLine
//
// Kapselt einen esp-hal `Output` (LED oder Relais) hinter dem
// OutputLine-Trait aus outlet-core.

use esp_hal::gpio::Output;
use outlet_core::{LineError, OutputLine};

/// Digitaler Ausgang (LED oder Relais)
pub struct GpioLine {
    pin: Output<'static>,
}

impl GpioLine {
    /// Erstellt eine GpioLine aus einem bereits konfigurierten Ausgang
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputLine for GpioLine {
    fn set(&mut self, high: bool) -> Result<(), LineError> {
        // GPIO-Schreiben kann auf dem ESP32-C6 nicht fehlschlagen
        if high {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        Ok(())
    }
}
