//! Shared application state for all routes. Built once at startup.

use crate::service::CatalogService;
use crate::stats::StatsAggregator;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub catalog: CatalogService,
    pub stats: StatsAggregator,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState {
            catalog: CatalogService::new(pool.clone()),
            stats: StatsAggregator::new(pool.clone()),
            pool,
        }
    }
}
