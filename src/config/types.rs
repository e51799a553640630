//! Runtime settings and their defaults.

use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATS_INTERVAL_MINUTES: u64 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
    /// Minutes between aggregator runs. 0 disables the scheduler.
    pub stats_interval_minutes: u64,
    pub body_limit_bytes: usize,
}

impl AppConfig {
    /// Scheduler period, or None when statistics collection is disabled.
    pub fn stats_period(&self) -> Option<Duration> {
        match self.stats_interval_minutes {
            0 => None,
            m => Some(Duration::from_secs(m * 60)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: DEFAULT_BIND_ADDR.into(),
            stats_interval_minutes: DEFAULT_STATS_INTERVAL_MINUTES,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}
