//! Service routes: liveness, readiness against the catalog schema, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

/// Tables the catalog cannot serve without.
const REQUIRED_TABLES: [&str; 3] = ["author", "book", "stats_snapshot"];

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// Catalog tables absent from the store; `Err` when the store is unreachable.
async fn missing_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, sqlx::Error> {
    let present: Vec<String> = sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
        .fetch_all(pool)
        .await?;
    Ok(REQUIRED_TABLES
        .into_iter()
        .filter(|t| !present.iter().any(|p| p == t))
        .collect())
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let (status, body) = match missing_tables(&state.pool).await {
        Ok(missing) if missing.is_empty() => (
            StatusCode::OK,
            Readiness { status: "ok", database: "ok", missing_tables: missing },
        ),
        Ok(missing) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Readiness { status: "degraded", database: "schema_missing", missing_tables: missing },
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Readiness { status: "degraded", database: "unavailable", missing_tables: Vec::new() },
            )
        }
    };
    (status, Json(body))
}

async fn version() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
