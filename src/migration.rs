//! Schema definition for the catalog tables. Idempotent: every statement is
//! `IF NOT EXISTS`, so it runs on each startup.

use crate::error::AppError;
use sqlx::SqlitePool;

/// DDL in dependency order (book references author).
const SCHEMA: &[(&str, &str)] = &[
    (
        "author",
        r#"
        CREATE TABLE IF NOT EXISTS author (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name VARCHAR(128) NOT NULL,
            last_name VARCHAR(128) NOT NULL
        )
        "#,
    ),
    (
        "book",
        r#"
        CREATE TABLE IF NOT EXISTS book (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title VARCHAR(256) NOT NULL,
            pub_date TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES author(id) ON DELETE CASCADE
        )
        "#,
    ),
    (
        "book_author_id_idx",
        "CREATE INDEX IF NOT EXISTS book_author_id_idx ON book (author_id)",
    ),
    (
        "stats_snapshot",
        r#"
        CREATE TABLE IF NOT EXISTS stats_snapshot (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            count_of_author INTEGER NOT NULL CHECK (count_of_author >= 0),
            count_of_book INTEGER NOT NULL CHECK (count_of_book >= 0),
            created_at TEXT NOT NULL
        )
        "#,
    ),
];

pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for (name, ddl) in SCHEMA {
        tracing::debug!(object = %name, "apply ddl");
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(objects = SCHEMA.len(), "schema ready");
    Ok(())
}
