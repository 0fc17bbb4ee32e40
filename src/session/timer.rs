use std::time::{Duration, Instant};

const SECOND: Duration = Duration::from_secs(1);

/// Emits whole-second ticks from a start instant. The terminal event pump
/// wakes far more often than once a second, so the app polls this after every
/// event.
#[derive(Clone, Debug, Default)]
pub struct SecondTicker {
    next: Option<Instant>,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + SECOND);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Number of ticks that have come due by `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next else {
            return 0;
        };
        let mut due = 0;
        while next <= now {
            due += 1;
            next += SECOND;
        }
        self.next = Some(next);
        due
    }
}
