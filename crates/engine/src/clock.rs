//! Periodic tick source.

use std::time::{Duration, Instant};

/// Fires once per interval; callers wait on [`TickClock::timeout`] between polls.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_due: Instant,
}

impl TickClock {
    /// A clock whose first tick is one interval after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Time left until the next tick (zero when it is already due).
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Returns true when a tick is due, and schedules the next one from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}
