//! Fixed-interval ticker driven by the UI frame loop.
//!
//! egui only runs code when it paints a frame, so periodic work is polled:
//! each frame asks the ticker whether the interval has elapsed.

use std::time::{Duration, Instant};

/// Reports at most one tick per `interval`.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true (and restarts the interval) when a tick is due.
    /// The very first poll always ticks so state is fresh on startup.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }

    /// Time left until the next tick is due.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_ticks() {
        let mut ticker = IntervalTicker::new(Duration::from_secs(1));
        assert!(ticker.poll(Instant::now()));
    }

    #[test]
    fn ticks_at_most_once_per_interval() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(Duration::from_secs(1));
        assert!(ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(16)));
        assert!(!ticker.poll(start + Duration::from_millis(999)));
        assert!(ticker.poll(start + Duration::from_millis(1000)));
        assert!(!ticker.poll(start + Duration::from_millis(1500)));
        assert!(ticker.poll(start + Duration::from_millis(2100)));
    }

    #[test]
    fn reports_time_until_next_tick() {
        let start = Instant::now();
        let mut ticker = IntervalTicker::new(Duration::from_secs(1));
        assert_eq!(ticker.time_until_next(start), Duration::ZERO);
        ticker.poll(start);
        assert_eq!(
            ticker.time_until_next(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
    }
}
