//! Repeating tick that can be armed and cancelled.

use std::future;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// A repeating timer that only fires while armed.
///
/// Arming starts a fresh period, so the first tick comes one full period
/// after [`arm`][Self::arm].  Ticks missed because the session was busy are
/// skipped rather than replayed in a burst.
#[derive(Debug)]
pub struct TickSchedule {
    period:   Duration,
    interval: Option<Interval>,
}

impl TickSchedule {
    pub fn new(period: Duration) -> Self {
        Self { period, interval: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Start ticking.  Re-arming restarts the period.
    pub fn arm(&mut self) {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
    }

    pub fn cancel(&mut self) {
        self.interval = None;
    }

    /// Wait for the next tick.  Never completes while cancelled.
    ///
    /// Cancel-safe, so it can sit in a `select!` next to other sources.
    pub async fn tick(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => future::pending().await,
        }
    }
}
