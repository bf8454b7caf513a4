//! Autoplay deadline owned by a carousel controller
//!
//! A controller holds at most one [`AutoplayTimer`]. Every timer gets a fresh
//! generation number when it is scheduled, so a tick that was already in
//! flight when the timer got replaced can be recognised and dropped.

use std::time::Duration;
use tokio::time::Instant;

/// A scheduled autoplay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTimer {
    deadline: Instant,
    generation: u64,
}

impl AutoplayTimer {
    pub fn schedule(now: Instant, interval: Duration, generation: u64) -> Self {
        Self {
            deadline: now + interval,
            generation,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline, zero once due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// What a host needs to deliver the next tick: when, and which timer it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub deadline: Instant,
    pub generation: u64,
}

impl From<&AutoplayTimer> for TimerTick {
    fn from(timer: &AutoplayTimer) -> Self {
        Self {
            deadline: timer.deadline,
            generation: timer.generation,
        }
    }
}
