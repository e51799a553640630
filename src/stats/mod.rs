//! Periodic catalog statistics: the aggregator writes snapshots, the
//! scheduler runs it on a timer.

mod aggregator;
mod scheduler;
pub use aggregator::StatsAggregator;
pub use scheduler::StatsScheduler;
