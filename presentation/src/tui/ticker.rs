//! Phase ticker
//!
//! A one-second interval that only exists while the session timer runs.
//! Every change of [`Session::timer_epoch`](panel_domain::Session::timer_epoch)
//! tears the interval down and arms a fresh one, so the first tick after a
//! phase change, start, or resume lands one full period later.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Session countdown period
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct PhaseTicker {
    period: Duration,
    interval: Option<Interval>,
    armed_for: Option<(u64, bool)>,
}

impl Default for PhaseTicker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl PhaseTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
            armed_for: None,
        }
    }

    /// Re-arm or disarm for the given timer epoch.
    ///
    /// A no-op while `(epoch, running)` is unchanged, so calling this before
    /// every redraw keeps the current interval phase.
    pub fn sync(&mut self, epoch: u64, running: bool) {
        if self.armed_for == Some((epoch, running)) {
            return;
        }
        self.armed_for = Some((epoch, running));
        self.interval = running.then(|| {
            let mut interval = interval_at(Instant::now() + self.period, self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        tracing::debug!(epoch, running, "Ticker re-armed");
    }

    /// Wait for the next tick. Pending forever while disarmed.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_a_full_period() {
        let mut ticker = PhaseTicker::default();
        ticker.sync(1, true);
        let started = Instant::now();

        ticker.tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD);

        ticker.tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_ticker_never_fires() {
        let mut ticker = PhaseTicker::default();
        ticker.sync(1, false);
        assert!(!ticker.is_armed());
        assert!(timeout(Duration::from_secs(10), ticker.tick()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_epoch_restarts_the_period() {
        let mut ticker = PhaseTicker::default();
        ticker.sync(1, true);
        tokio::time::advance(Duration::from_millis(900)).await;

        ticker.sync(2, true);
        let rearmed = Instant::now();
        ticker.tick().await;
        assert_eq!(rearmed.elapsed(), TICK_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_epoch_keeps_the_schedule() {
        let mut ticker = PhaseTicker::default();
        ticker.sync(1, true);
        let started = Instant::now();
        tokio::time::advance(Duration::from_millis(600)).await;

        ticker.sync(1, true);
        ticker.tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD);
    }
}
