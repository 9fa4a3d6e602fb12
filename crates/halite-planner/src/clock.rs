//! Time sources for the per-turn think budget.
//!
//! The planner never reads wall-clock time directly; it asks a [`Clock`]. Production code uses
//! [`MonotonicClock`], tests use [`ManualClock`] to exhaust the budget deterministically.

use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Monotonic time since an arbitrary origin.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Every read returns the current time and then advances it by `step`.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    step: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stepping(step: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

/// Think time accumulated over one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkBudget {
    threshold: Duration,
    spent: Duration,
}

impl ThinkBudget {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            spent: Duration::ZERO,
        }
    }

    pub fn record(&mut self, elapsed: Duration) {
        self.spent = self.spent.saturating_add(elapsed);
    }

    pub fn spent(&self) -> Duration {
        self.spent
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Strictly past the threshold.
    pub fn exhausted(&self) -> bool {
        self.spent > self.threshold
    }
}
