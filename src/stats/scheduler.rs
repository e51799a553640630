//! Timer loop driving [`StatsAggregator`].

use crate::stats::StatsAggregator;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub struct StatsScheduler {
    aggregator: StatsAggregator,
    period: Duration,
}

impl StatsScheduler {
    pub fn new(aggregator: StatsAggregator, period: Duration) -> Self {
        StatsScheduler { aggregator, period }
    }

    /// Run the aggregator every `period` (first run one period from now) until
    /// `shutdown` resolves. Ticks missed while a run overruns are dropped, so
    /// there is no burst of catch-up runs.
    pub fn spawn<F>(self, shutdown: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(async move {
            let period = self.period.max(Duration::from_millis(1));
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            tokio::pin!(shutdown);
            tracing::info!(period_secs = period.as_secs_f64(), "stats scheduler started");
            loop {
                tokio::select! {
                    _ = &mut shutdown => break,
                    _ = ticker.tick() => self.aggregator.tick().await,
                }
            }
            tracing::info!("stats scheduler stopped");
        })
    }
}
