//! Repeating one-second ticker

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// At most one armed interval; the session arms it while the machine runs
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Replace any armed interval with a fresh one whose first tick is one
    /// period from now
    pub fn arm(&mut self) {
        self.interval = None;
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn cancel(&mut self) {
        self.interval = None;
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick. Never completes while disarmed.
    ///
    /// Cancel safe, so it can sit in a `select!` loop.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::every_second()
    }
}
