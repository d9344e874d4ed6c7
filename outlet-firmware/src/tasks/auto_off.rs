// Auto-Off Task - Einmal-Timer und Warn-Sequenz einer Steckdose
use defmt::{error, info};
use embassy_futures::select::{Either, select};
use embassy_time::Timer;
use outlet_core::{OutletId, TimerTicket, warning_steps};

use crate::config::OUTLET_COUNT;
use crate::tasks::log_transition;
use crate::{SharedOutlet, TimerCommand, TimerSignal, with_outlet};

/// Auto-Off-Logik einer Steckdose
///
/// Wartet auf `TimerCommand::Arm` und lässt den Timer ablaufen, solange kein
/// neueres Kommando eintrifft. Der Ablauf wird im Controller über das Ticket
/// geprüft; ein veraltetes Ticket bewirkt nichts.
pub async fn auto_off_logic(outlet: &SharedOutlet, commands: &TimerSignal) {
    let (id, debug) = with_outlet(outlet, |c| (c.id(), c.config().debug));

    let mut command = commands.wait().await;
    loop {
        let (ticket, after_ms) = match command {
            TimerCommand::Arm { ticket, after_ms } => (ticket, after_ms),
            TimerCommand::Disarm => {
                command = commands.wait().await;
                continue;
            }
        };

        command = match select(Timer::after_millis(after_ms), commands.wait()).await {
            Either::First(()) => {
                expire(outlet, ticket, id, debug).await;
                commands.wait().await
            }
            Either::Second(next) => next,
        };
    }
}

/// Timer abgelaufen: Warn-Sequenz (2 s), dann ausschalten
///
/// Das Relais bleibt während der Warnung an. Ein Tastendruck in dieser Zeit
/// bricht die Sequenz ab.
async fn expire(outlet: &SharedOutlet, ticket: TimerTicket, id: OutletId, debug: bool) {
    let Some(token) = with_outlet(outlet, |c| c.on_auto_off_expired(ticket)) else {
        return;
    };
    if debug {
        info!("Steckdose {}: Auto-Off", id.0);
    }

    let mut blink = 0;
    for step in warning_steps() {
        match with_outlet(outlet, |c| c.warning_write(token, step.level)) {
            Ok(true) => {}
            Ok(false) => {
                if debug {
                    info!("Steckdose {}: Warnung abgebrochen", id.0);
                }
                return;
            }
            Err(e) => error!("Steckdose {}: LED nicht geschrieben: {}", id.0, e),
        }
        if debug && step.level {
            info!("Steckdose {}: Blinken {}", id.0, blink);
            blink += 1;
        }
        Timer::after_millis(step.hold_ms).await;
    }

    match with_outlet(outlet, |c| c.finish_warning(token)) {
        Ok(Some(transition)) => {
            if debug {
                log_transition(id, &transition);
            }
        }
        Ok(None) => {}
        Err(e) => error!("Steckdose {}: Ausgang nicht geschrieben: {}", id.0, e),
    }
}

/// Auto-Off Task - Embassy Task für parallele Ausführung
#[embassy_executor::task(pool_size = OUTLET_COUNT)]
pub async fn auto_off_task(outlet: &'static SharedOutlet, commands: &'static TimerSignal) {
    auto_off_logic(outlet, commands).await;
}
