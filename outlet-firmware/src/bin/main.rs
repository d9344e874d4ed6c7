// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use core::cell::RefCell;

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{AnyPin, Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use outlet_steuerung::config::{OUTLET_CONFIG, OUTLET_COUNT};
use outlet_steuerung::hal::{GpioLine, SignalBlink, SignalTimer};
use outlet_steuerung::tasks::{auto_off_task, blink_task, button_task};
use outlet_steuerung::{BlinkSignal, FirmwareController, OutletId, SharedOutlet, TimerSignal};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

// Signals und Controller müssen 'static sein für Tasks
static TIMER_SIGNALS: [TimerSignal; OUTLET_COUNT] = [const { Signal::new() }; OUTLET_COUNT];
static BLINK_SIGNALS: [BlinkSignal; OUTLET_COUNT] = [const { Signal::new() }; OUTLET_COUNT];
static OUTLETS: [StaticCell<SharedOutlet>; OUTLET_COUNT] =
    [const { StaticCell::new() }; OUTLET_COUNT];

/// GPIO-Zuordnung einer Steckdose
struct OutletPins {
    led: AnyPin<'static>,
    button: AnyPin<'static>,
    relay: AnyPin<'static>,
}

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt pro Steckdose
/// Tasten-, Auto-Off- und Blink-Task. Danach schläft main() - alle Arbeit
/// läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Pin-Belegung siehe config.rs
    let pins: [OutletPins; OUTLET_COUNT] = [
        OutletPins {
            led: peripherals.GPIO7.into(),
            button: peripherals.GPIO0.into(),
            relay: peripherals.GPIO8.into(),
        },
        OutletPins {
            led: peripherals.GPIO4.into(),
            button: peripherals.GPIO1.into(),
            relay: peripherals.GPIO9.into(),
        },
        OutletPins {
            led: peripherals.GPIO5.into(),
            button: peripherals.GPIO2.into(),
            relay: peripherals.GPIO10.into(),
        },
        OutletPins {
            led: peripherals.GPIO6.into(),
            button: peripherals.GPIO3.into(),
            relay: peripherals.GPIO11.into(),
        },
    ];

    for (index, pins) in pins.into_iter().enumerate() {
        // IDs werden hier vergeben, nicht über einen globalen Zähler
        let id = OutletId(index as u8 + 1);

        let led = GpioLine::new(Output::new(pins.led, Level::Low, OutputConfig::default()));
        let relay = GpioLine::new(Output::new(pins.relay, Level::Low, OutputConfig::default()));
        let button = Input::new(pins.button, InputConfig::default().with_pull(Pull::Up));

        let timer_signal = &TIMER_SIGNALS[index];
        let blink_signal = &BLINK_SIGNALS[index];

        let controller = FirmwareController::new(
            id,
            OUTLET_CONFIG,
            led,
            relay,
            SignalTimer::new(timer_signal),
            SignalBlink::new(blink_signal),
        )
        .expect("Steckdose konnte nicht ausgeschaltet werden");

        let outlet: &'static SharedOutlet =
            OUTLETS[index].init(Mutex::new(RefCell::new(controller)));

        spawner.spawn(button_task(outlet, button)).unwrap();
        spawner.spawn(auto_off_task(outlet, timer_signal)).unwrap();
        spawner.spawn(blink_task(outlet, blink_signal)).unwrap();

        info!(
            "Steckdose {} bereit (langer Druck > {} ms, Auto-Off nach {} ms)",
            id.0, OUTLET_CONFIG.long_press_threshold_ms, OUTLET_CONFIG.auto_off_ms
        );
    }

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
