use std::time::Instant;

use crate::session::input::KeystrokeEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub total_chars: usize,
    pub correct_chars: usize,
    pub errors: usize,
}

/// Tallies forward keystrokes. Backspace entries carry no score.
pub fn calculate(events: &[KeystrokeEvent]) -> Counts {
    let mut counts = Counts::default();
    for ev in events.iter().filter(|ev| !ev.backspace) {
        counts.total_chars += 1;
        if ev.correct {
            counts.correct_chars += 1;
        } else {
            counts.errors += 1;
        }
    }
    counts
}

#[derive(Clone, Debug, Default)]
pub struct Stats {
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub counts: Counts,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.finished_at = None;
    }

    pub fn stop(&mut self, now: Instant) {
        self.finished_at = Some(now);
    }

    pub fn calculate(&mut self, events: &[KeystrokeEvent]) {
        self.counts = calculate(events);
    }

    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).as_secs_f64(),
            _ => 0.0,
        }
    }

    pub fn wpm(&self) -> f64 {
        let elapsed = self.elapsed_secs();
        if elapsed <= 0.0 {
            return 0.0;
        }
        (self.counts.correct_chars as f64 / 5.0) / (elapsed / 60.0)
    }

    pub fn accuracy(&self) -> f64 {
        if self.counts.total_chars == 0 {
            return 0.0;
        }
        self.counts.correct_chars as f64 / self.counts.total_chars as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn ev(typed: char, expected: char, backspace: bool, at: Instant) -> KeystrokeEvent {
        if backspace {
            KeystrokeEvent::backspace(expected, at)
        } else {
            KeystrokeEvent::typed(typed, expected, at)
        }
    }

    #[test]
    fn test_counts_exclude_backspace() {
        let t0 = Instant::now();
        let events = vec![
            ev('a', 'a', false, t0),
            ev('x', 'b', false, t0),
            ev('b', 'b', true, t0),
            ev('b', 'b', false, t0),
        ];
        let counts = calculate(&events);
        assert_eq!(
            counts,
            Counts {
                total_chars: 3,
                correct_chars: 2,
                errors: 1
            }
        );
    }

    #[test]
    fn test_wpm_and_accuracy_over_one_minute() {
        let t0 = Instant::now();
        let events = vec![
            ev('h', 'h', false, t0),
            ev('e', 'a', false, t0),
            ev('l', 'l', false, t0),
        ];
        let mut stats = Stats::new();
        stats.start(t0);
        stats.stop(t0 + Duration::from_secs(60));
        stats.calculate(&events);

        assert_eq!(stats.counts.total_chars, 3);
        assert_eq!(stats.counts.correct_chars, 2);
        assert_eq!(stats.counts.errors, 1);
        assert!((stats.accuracy() - 66.666).abs() < 0.01);
        assert!((stats.wpm() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_empty_log_guards_division() {
        let mut stats = Stats::new();
        stats.calculate(&[]);
        assert_eq!(stats.counts.total_chars, 0);
        assert_eq!(stats.accuracy(), 0.0);
        assert_eq!(stats.wpm(), 0.0);
    }

    #[test]
    fn test_zero_elapsed_gives_zero_wpm() {
        let t0 = Instant::now();
        let mut stats = Stats::new();
        stats.start(t0);
        stats.stop(t0);
        stats.calculate(&[ev('a', 'a', false, t0)]);
        assert_eq!(stats.wpm(), 0.0);
        assert_eq!(stats.accuracy(), 100.0);
    }

    #[test]
    fn test_not_started_has_no_elapsed_time() {
        let stats = Stats::new();
        assert_eq!(stats.elapsed_secs(), 0.0);
    }
}
