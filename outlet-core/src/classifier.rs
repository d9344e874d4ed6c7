//! Tasten-Klassifizierung in zwei Phasen
//!
//! 1. `on_falling_edge()` läuft direkt nach der fallenden Flanke: nur
//!    Zeitstempel und Entprellung, kein Warten.
//! 2. `resolve()` läuft im Task-Kontext, sobald die steigende Flanke kam
//!    oder die Obergrenze abgelaufen ist.

use crate::config::DEBOUNCE_WINDOW_MS;
use crate::logic::{classify_duration, elapsed_ms};
use crate::types::{ButtonEvent, EdgeOutcome, PressEnd};

#[derive(Debug, Clone)]
pub struct PressClassifier {
    long_press_threshold_ms: u64,
    last_press_ms: Option<u64>,
    pending_since_ms: Option<u64>,
}

impl PressClassifier {
    pub fn new(long_press_threshold_ms: u64) -> Self {
        Self {
            long_press_threshold_ms,
            last_press_ms: None,
            pending_since_ms: None,
        }
    }

    /// Zeitstempel der zuletzt erfassten Flanke
    pub fn last_press_ms(&self) -> Option<u64> {
        self.last_press_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since_ms.is_some()
    }

    /// Fallende Flanke erfassen
    ///
    /// Flanken innerhalb von `DEBOUNCE_WINDOW_MS` nach der letzten Flanke
    /// werden verworfen und verschieben das Fenster.
    pub fn on_falling_edge(&mut self, now_ms: u64) -> EdgeOutcome {
        if self.pending_since_ms.is_some() {
            return EdgeOutcome::PressInProgress;
        }

        if let Some(last) = self.last_press_ms {
            if elapsed_ms(now_ms, last) < DEBOUNCE_WINDOW_MS {
                self.last_press_ms = Some(now_ms);
                return EdgeOutcome::Debounced;
            }
        }

        self.last_press_ms = Some(now_ms);
        self.pending_since_ms = Some(now_ms);
        EdgeOutcome::Accepted
    }

    /// Offenen Tastendruck auswerten
    ///
    /// Gibt das Ereignis und die gemessene Dauer zurück (`None` bei Obergrenze).
    pub fn resolve(&mut self, end: PressEnd) -> (ButtonEvent, Option<u64>) {
        let Some(start) = self.pending_since_ms.take() else {
            return (ButtonEvent::Ignored, None);
        };

        match end {
            PressEnd::Released { at_ms } => {
                let duration = elapsed_ms(at_ms, start);
                (
                    classify_duration(duration, self.long_press_threshold_ms),
                    Some(duration),
                )
            }
            PressEnd::CeilingReached => (ButtonEvent::HeldBeyondCeiling, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edge_is_accepted() {
        let mut classifier = PressClassifier::new(1_000);
        assert_eq!(classifier.on_falling_edge(0), EdgeOutcome::Accepted);
        assert!(classifier.is_pending());
        assert_eq!(classifier.last_press_ms(), Some(0));
    }

    #[test]
    fn test_short_press() {
        let mut classifier = PressClassifier::new(1_000);
        classifier.on_falling_edge(10_000);
        let (event, duration) = classifier.resolve(PressEnd::Released { at_ms: 10_200 });
        assert_eq!(event, ButtonEvent::ShortPress);
        assert_eq!(duration, Some(200));
        assert!(!classifier.is_pending());
    }

    #[test]
    fn test_long_press() {
        let mut classifier = PressClassifier::new(1_000);
        classifier.on_falling_edge(10_000);
        let (event, _) = classifier.resolve(PressEnd::Released { at_ms: 11_500 });
        assert_eq!(event, ButtonEvent::LongPress);
    }

    #[test]
    fn test_bounce_press() {
        let mut classifier = PressClassifier::new(1_000);
        classifier.on_falling_edge(10_000);
        let (event, duration) = classifier.resolve(PressEnd::Released { at_ms: 10_020 });
        assert_eq!(event, ButtonEvent::Bounce);
        assert_eq!(duration, Some(20));
    }

    #[test]
    fn test_ceiling_reached() {
        let mut classifier = PressClassifier::new(1_000);
        classifier.on_falling_edge(10_000);
        let (event, duration) = classifier.resolve(PressEnd::CeilingReached);
        assert_eq!(event, ButtonEvent::HeldBeyondCeiling);
        assert_eq!(duration, None);
    }

    #[test]
    fn test_edge_within_window_is_debounced() {
        let mut classifier = PressClassifier::new(1_000);
        classifier.on_falling_edge(10_000);
        classifier.resolve(PressEnd::Released { at_ms: 10_080 });

        assert_eq!(classifier.on_falling_edge(10_100), EdgeOutcome::Debounced);
        assert_eq!(classifier.last_press_ms(), Some(10_100));
        assert!(!classifier.is_pending());
    }

    #[test]
    fn test_debounced_edge_moves_window() {
        let mut classifier = PressClassifier::new(1_000);
        classifier.on_falling_edge(10_000);
        classifier.resolve(PressEnd::Released { at_ms: 10_100 });

        assert_eq!(classifier.on_falling_edge(10_400), EdgeOutcome::Debounced);
        // 600 ms nach der ersten, aber nur 200 ms nach der letzten Flanke
        assert_eq!(classifier.on_falling_edge(10_600), EdgeOutcome::Debounced);
        assert_eq!(classifier.on_falling_edge(11_100), EdgeOutcome::Accepted);
    }

    #[test]
    fn test_edge_during_press_keeps_start() {
        let mut classifier = PressClassifier::new(1_000);
        classifier.on_falling_edge(10_000);
        assert_eq!(
            classifier.on_falling_edge(10_700),
            EdgeOutcome::PressInProgress
        );
        assert_eq!(classifier.last_press_ms(), Some(10_000));

        let (_, duration) = classifier.resolve(PressEnd::Released { at_ms: 10_900 });
        assert_eq!(duration, Some(900));
    }

    #[test]
    fn test_resolve_without_edge_is_ignored() {
        let mut classifier = PressClassifier::new(1_000);
        assert_eq!(
            classifier.resolve(PressEnd::Released { at_ms: 500 }),
            (ButtonEvent::Ignored, None)
        );
    }
}
