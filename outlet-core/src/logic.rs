//! Pure Business Logic Functions
//!
//! Zeitberechnung und Blink-Muster ohne Hardware-Dependencies (testbar!)

use crate::config::{HELD_BLINK_HALF_PERIOD_MS, MIN_PRESS_MS, WARNING_BLINKS, WARNING_HALF_PERIOD_MS};
use crate::types::{BlinkStep, ButtonEvent};

/// Vergangene Zeit zwischen zwei monotonen Zeitstempeln
///
/// Liegt `earlier` nach `now`, ist das Ergebnis 0.
pub fn elapsed_ms(now: u64, earlier: u64) -> u64 {
    now.saturating_sub(earlier)
}

/// Klassifiziert eine gemessene Druckdauer
///
/// # Beispiele
///
/// ```
/// # use outlet_core::{ButtonEvent, classify_duration};
/// assert_eq!(classify_duration(20, 1000), ButtonEvent::Bounce);
/// assert_eq!(classify_duration(200, 1000), ButtonEvent::ShortPress);
/// assert_eq!(classify_duration(1500, 1000), ButtonEvent::LongPress);
/// ```
pub fn classify_duration(duration_ms: u64, threshold_ms: u64) -> ButtonEvent {
    if duration_ms > threshold_ms {
        ButtonEvent::LongPress
    } else if duration_ms >= MIN_PRESS_MS {
        ButtonEvent::ShortPress
    } else {
        ButtonEvent::Bounce
    }
}

/// Warn-Sequenz vor der automatischen Abschaltung: 10x (100 ms an, 100 ms aus)
pub fn warning_steps() -> impl Iterator<Item = BlinkStep> {
    (0..WARNING_BLINKS * 2).map(|i| BlinkStep {
        level: i % 2 == 0,
        hold_ms: WARNING_HALF_PERIOD_MS,
    })
}

/// Eine halbe Periode des Dauer-Blinkens
pub fn held_blink_step(level: bool) -> BlinkStep {
    BlinkStep {
        level,
        hold_ms: HELD_BLINK_HALF_PERIOD_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_saturates() {
        assert_eq!(elapsed_ms(1_000, 400), 600);
        assert_eq!(elapsed_ms(400, 1_000), 0);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_duration(49, 1_000), ButtonEvent::Bounce);
        assert_eq!(classify_duration(50, 1_000), ButtonEvent::ShortPress);
        assert_eq!(classify_duration(1_000, 1_000), ButtonEvent::ShortPress);
        assert_eq!(classify_duration(1_001, 1_000), ButtonEvent::LongPress);
    }

    #[test]
    fn test_warning_sequence_is_ten_blinks_in_two_seconds() {
        let mut count = 0;
        let mut on_count = 0;
        let mut total_ms = 0;
        let mut expected_level = true;
        for step in warning_steps() {
            assert_eq!(step.level, expected_level);
            expected_level = !expected_level;
            count += 1;
            total_ms += step.hold_ms;
            if step.level {
                on_count += 1;
            }
        }
        assert_eq!(count, 20);
        assert_eq!(on_count, 10);
        assert_eq!(total_ms, 2_000);
    }

    #[test]
    fn test_warning_sequence_ends_dark() {
        let last = warning_steps().last();
        assert_eq!(last.map(|s| s.level), Some(false));
    }

    #[test]
    fn test_held_blink_is_one_hertz() {
        let on = held_blink_step(true);
        let off = held_blink_step(false);
        assert_eq!(on.hold_ms + off.hold_ms, 1_000);
    }
}
