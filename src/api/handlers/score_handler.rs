//! Per-user score handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::domain::{Score, UserResponse};
use crate::errors::AppResult;

/// Ordering of a user's score list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScoreListQuery {
    /// Sort by the leaderboard sort key instead of submission order
    #[serde(default)]
    pub ranked: bool,
}

/// A user together with their scores
#[derive(Debug, Serialize, ToSchema)]
pub struct UserScoresResponse {
    pub user: UserResponse,
    pub scores: Vec<Score>,
}

/// Create per-user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/:user_id/scores", get(user_scores))
}

/// List a user's scores
#[utoipa::path(
    get,
    path = "/users/{user_id}/scores",
    tag = "Scores",
    params(
        ("user_id" = String, Path, description = "Login name"),
        ScoreListQuery
    ),
    responses(
        (status = 200, description = "User and scores", body = UserScoresResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn user_scores(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ScoreListQuery>,
) -> AppResult<Json<UserScoresResponse>> {
    let user = state.account_service.get_user(&user_id).await?;
    let scores = state.score_service.user_scores(&user, query.ranked).await?;

    Ok(Json(UserScoresResponse {
        user: UserResponse::from(&user),
        scores,
    }))
}
