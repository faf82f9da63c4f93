//! Leaderboard handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::{LeaderboardEntry, MetricDefinition};
use crate::errors::AppResult;

/// Create leaderboard routes
pub fn leaderboard_routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(leaderboard))
        .route("/metrics/definitions", get(metric_definitions))
}

/// Each user's best score, ranked by the sort key metric
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "Leaderboard",
    responses(
        (status = 200, description = "Ranked leaderboard", body = [LeaderboardEntry])
    )
)]
pub async fn leaderboard(State(state): State<AppState>) -> AppResult<Json<Vec<LeaderboardEntry>>> {
    let entries = state.score_service.leaderboard().await?;
    Ok(Json(entries))
}

/// Metric names, labels and which one ranks the leaderboard
#[utoipa::path(
    get,
    path = "/metrics/definitions",
    tag = "Leaderboard",
    responses(
        (status = 200, description = "Metric metadata", body = [MetricDefinition])
    )
)]
pub async fn metric_definitions(State(state): State<AppState>) -> Json<Vec<MetricDefinition>> {
    Json(state.score_service.metrics())
}
