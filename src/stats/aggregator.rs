//! Count authors and books and append a snapshot.

use crate::error::AppError;
use crate::model::StatsSnapshot;
use chrono::Utc;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct StatsAggregator {
    pool: SqlitePool,
}

impl StatsAggregator {
    pub fn new(pool: SqlitePool) -> Self {
        StatsAggregator { pool }
    }

    /// Compute counts and persist at most one snapshot.
    ///
    /// Returns `None` without writing when there are no authors, whatever the
    /// book count. Counts are read without a transaction, so a snapshot taken
    /// during concurrent writes may mix before and after states.
    pub async fn run_once(&self) -> Result<Option<StatsSnapshot>, AppError> {
        let count_of_author: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM author")
            .fetch_one(&self.pool)
            .await?;
        let count_of_book: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_optional(&self.pool)
            .await?;

        if count_of_author <= 0 {
            tracing::info!("no authors yet, skipping stats snapshot");
            return Ok(None);
        }
        let Some(count_of_book) = count_of_book else {
            tracing::info!("book count unavailable, skipping stats snapshot");
            return Ok(None);
        };

        let created_at = Utc::now();
        let id = sqlx::query(
            "INSERT INTO stats_snapshot (count_of_author, count_of_book, created_at) VALUES (?, ?, ?)",
        )
        .bind(count_of_author)
        .bind(count_of_book)
        .bind(created_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!(snapshot_id = id, count_of_author, count_of_book, "stats snapshot written");
        Ok(Some(StatsSnapshot {
            id,
            count_of_author,
            count_of_book,
            created_at,
        }))
    }

    /// One scheduled run. Failures are logged, never returned.
    pub async fn tick(&self) {
        if let Err(e) = self.run_once().await {
            tracing::warn!(error = %e, "stats aggregation failed, skipping this run");
        }
    }

    /// All snapshots, oldest first.
    pub async fn list_snapshots(&self) -> Result<Vec<StatsSnapshot>, AppError> {
        let rows = sqlx::query_as::<_, StatsSnapshot>(
            "SELECT id, count_of_author, count_of_book, created_at FROM stats_snapshot ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
