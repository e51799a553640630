//! SQLite pool construction.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pool for `database_url`, creating the database file if missing and
/// enforcing foreign keys on every connection.
///
/// An in-memory database lives only as long as its connection, so those pools
/// hold exactly one connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(url = %database_url, "database pool ready");
    Ok(pool)
}

/// Fresh in-memory store with the schema applied.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let pool = connect("sqlite::memory:", 1).await?;
    crate::migration::apply_migrations(&pool).await?;
    Ok(pool)
}
