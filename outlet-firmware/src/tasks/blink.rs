// Blink Task - Dauer-Blinken im Halte-Modus (1 Hz)
use defmt::error;
use embassy_futures::select::{Either, select};
use embassy_time::Timer;
use outlet_core::{BlinkHandle, OutletId, held_blink_step};

use crate::config::OUTLET_COUNT;
use crate::{BlinkCommand, BlinkSignal, SharedOutlet, with_outlet};

/// Blink-Logik einer Steckdose
///
/// Blinkt nach `BlinkCommand::Start` so lange, bis das Handle im Controller
/// ungültig wird oder ein neues Kommando eintrifft. Jeder LED-Zugriff prüft
/// das Handle unter dem Controller-Lock: nach einem Abbruch schreibt der
/// Task nichts mehr.
pub async fn blink_logic(outlet: &SharedOutlet, commands: &BlinkSignal) {
    let id = with_outlet(outlet, |c| c.id());

    let mut command = commands.wait().await;
    loop {
        command = match command {
            BlinkCommand::Start(handle) => blink_until_stopped(outlet, commands, handle, id).await,
            BlinkCommand::Cancel(_) => commands.wait().await,
        };
    }
}

async fn blink_until_stopped(
    outlet: &SharedOutlet,
    commands: &BlinkSignal,
    handle: BlinkHandle,
    id: OutletId,
) -> BlinkCommand {
    let mut level = true;
    loop {
        let step = held_blink_step(level);
        match with_outlet(outlet, |c| c.blink_write(handle, step.level)) {
            Ok(true) => {}
            // Handle veraltet: auf das nächste Kommando warten
            Ok(false) => return commands.wait().await,
            Err(e) => error!("Steckdose {}: LED nicht geschrieben: {}", id.0, e),
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        if let Either::Second(next) = select(Timer::after_millis(step.hold_ms), commands.wait()).await {
            return next;
        }
        level = !level;
    }
}

/// Blink Task - Embassy Task für parallele Ausführung
#[embassy_executor::task(pool_size = OUTLET_COUNT)]
pub async fn blink_task(outlet: &'static SharedOutlet, commands: &'static BlinkSignal) {
    blink_logic(outlet, commands).await;
}
