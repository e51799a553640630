//! Catalog service: authors and books over a REST API, with periodic
//! statistics snapshots.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod stats;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{app, catalog_routes, common_routes};
pub use service::{CatalogService, PageRequest};
pub use state::AppState;
pub use stats::{StatsAggregator, StatsScheduler};
pub use store::{connect, connect_in_memory};
