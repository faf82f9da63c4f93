//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{leaderboard_handler, score_handler};
use crate::domain::{LeaderboardEntry, Metric, MetricDefinition, Score, UserResponse};

/// OpenAPI documentation for the leaderboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leaderboard",
        version = "0.1.0",
        description = "Read-only leaderboard and score history",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        leaderboard_handler::leaderboard,
        leaderboard_handler::metric_definitions,
        score_handler::user_scores,
    ),
    components(
        schemas(
            Metric,
            MetricDefinition,
            Score,
            LeaderboardEntry,
            UserResponse,
            score_handler::UserScoresResponse,
        )
    ),
    tags(
        (name = "Leaderboard", description = "Ranked results"),
        (name = "Scores", description = "Per-user score history")
    )
)]
pub struct ApiDoc;
