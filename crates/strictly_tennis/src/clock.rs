//! Elapsed match time.
//!
//! The engine itself is timeless. Display layers record the uptime at
//! which the match started and ask for the elapsed time on refresh.

use std::time::{Duration, Instant};
use tracing::instrument;

/// Source of monotonic uptime.
pub trait MatchClock {
    /// Time since the clock's origin.
    fn uptime(&self) -> Duration;
}

/// Clock backed by [`Instant`], with its origin at construction.
#[derive(Debug, Clone, Copy)]
pub struct UptimeClock {
    origin: Instant,
}

impl UptimeClock {
    /// Creates a clock whose uptime starts now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchClock for UptimeClock {
    fn uptime(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Uptime at which a match started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    started_at: Duration,
}

impl ElapsedTime {
    /// Records the match start at the clock's current uptime.
    #[instrument(skip(clock))]
    pub fn start(clock: &impl MatchClock) -> Self {
        Self {
            started_at: clock.uptime(),
        }
    }

    /// Time played so far, truncated to whole seconds.
    pub fn elapsed(&self, clock: &impl MatchClock) -> Duration {
        let elapsed = clock.uptime().saturating_sub(self.started_at);
        Duration::from_secs(elapsed.as_secs())
    }

    /// Time played so far formatted as `H:MM:SS`.
    pub fn display(&self, clock: &impl MatchClock) -> String {
        format_elapsed(self.elapsed(clock))
    }
}

/// Formats a duration as `H:MM:SS`; hours are not padded.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total / 60) % 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ManualClock(Cell<Duration>);

    impl MatchClock for ManualClock {
        fn uptime(&self) -> Duration {
            self.0.get()
        }
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0:00:00");
        assert_eq!(format_elapsed(Duration::from_secs(59)), "0:00:59");
        assert_eq!(format_elapsed(Duration::from_secs(3 * 3600 + 7 * 60 + 5)), "3:07:05");
    }

    #[test]
    fn test_elapsed_since_start() {
        let clock = ManualClock(Cell::new(Duration::from_secs(100)));
        let started = ElapsedTime::start(&clock);

        clock.0.set(Duration::from_millis(100_000 + 61_900));
        assert_eq!(started.elapsed(&clock), Duration::from_secs(61));
        assert_eq!(started.display(&clock), "0:01:01");
    }

    #[test]
    fn test_clock_behind_start_saturates() {
        let clock = ManualClock(Cell::new(Duration::from_secs(10)));
        let started = ElapsedTime::start(&clock);

        clock.0.set(Duration::from_secs(5));
        assert_eq!(started.elapsed(&clock), Duration::ZERO);
    }
}
