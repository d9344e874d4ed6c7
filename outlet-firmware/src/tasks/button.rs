// Tasten Task - Erfasst Flanken und vermisst Tastendrücke
use defmt::{error, info};
use embassy_time::{Duration, Instant, with_timeout};
use esp_hal::gpio::Input;
use outlet_core::{EdgeOutcome, PressEnd};

use crate::config::OUTLET_COUNT;
use crate::tasks::log_transition;
use crate::{SharedOutlet, with_outlet};

/// Tasten-Logik einer Steckdose
///
/// Zwei Phasen pro Tastendruck:
/// 1. Fallende Flanke: Zeitstempel im Controller erfassen (kurzer Lock)
/// 2. Steigende Flanke oder Obergrenze abwarten - ohne Lock, andere Tasks
///    und Steckdosen laufen weiter - dann auswerten
///
/// # Parameter
/// - `outlet`: Geteilter Controller der Steckdose
/// - `button`: Low-aktiver Tasten-Eingang mit Pull-Up
pub async fn button_logic(outlet: &SharedOutlet, mut button: Input<'static>) {
    let (id, config) = with_outlet(outlet, |c| (c.id(), *c.config()));
    let ceiling = Duration::from_millis(config.press_ceiling_ms);

    loop {
        button.wait_for_falling_edge().await;
        let pressed_at = Instant::now().as_millis();

        match with_outlet(outlet, |c| c.on_falling_edge(pressed_at)) {
            EdgeOutcome::Accepted => {}
            outcome => {
                if config.debug {
                    info!("Steckdose {}: Flanke verworfen ({})", id.0, outcome);
                }
                continue;
            }
        }

        // Loslassen abwarten, höchstens bis zur Obergrenze (klemmende Taste)
        let end = match with_timeout(ceiling, button.wait_for_high()).await {
            Ok(()) => PressEnd::Released {
                at_ms: Instant::now().as_millis(),
            },
            Err(_) => PressEnd::CeilingReached,
        };

        match with_outlet(outlet, |c| c.on_press_end(end)) {
            Ok(report) => {
                if config.debug {
                    info!(
                        "Steckdose {}: {}, Grenze langer Druck: {} ms",
                        id.0, report, config.long_press_threshold_ms
                    );
                    if let Some(transition) = report.transition {
                        log_transition(id, &transition);
                    }
                }
            }
            Err(e) => error!("Steckdose {}: Ausgang nicht geschrieben: {}", id.0, e),
        }
    }
}

/// Tasten Task - Embassy Task für parallele Ausführung
///
/// Eine Instanz pro Steckdose (Pool-Größe = Anzahl Steckdosen).
#[embassy_executor::task(pool_size = OUTLET_COUNT)]
pub async fn button_task(outlet: &'static SharedOutlet, button: Input<'static>) {
    button_logic(outlet, button).await;
}
