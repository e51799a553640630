use crate::error::AppError;
use crate::model::StatsSnapshot;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = "statistics",
    responses((status = 200, description = "Snapshots, oldest first", body = [StatsSnapshot]))
)]
pub async fn list_statistics(State(state): State<AppState>) -> Result<Json<Vec<StatsSnapshot>>, AppError> {
    Ok(Json(state.stats.list_snapshots().await?))
}
