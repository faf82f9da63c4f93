//! HTTP route tests over an in-memory SQLite database.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use sea_orm::ConnectOptions;
use serde_json::Value;
use tower::ServiceExt;

use leaderboard::api::{create_router, AppState};
use leaderboard::domain::{CreateUser, ScoreSubmission};
use leaderboard::infra::Database;

// =============================================================================
// Test Helpers
// =============================================================================

async fn test_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect_with(options)
        .await
        .expect("in-memory database");
    AppState::from_database(Arc::new(db))
}

/// State with one user holding two scores.
async fn seeded_state() -> AppState {
    let state = test_state().await;
    let alice = state
        .account_service
        .provision(CreateUser {
            user_id: "alice".to_string(),
            password: "pw".to_string(),
            print_name: "Alice".to_string(),
            is_admin: false,
        })
        .await
        .unwrap();

    for ndcg in [0.3, 0.6] {
        state
            .score_service
            .submit(ScoreSubmission {
                user_primary_key: alice.id,
                comment: None,
                ndcg,
                f1: 0.1,
            })
            .await
            .unwrap();
    }
    state
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// =============================================================================
// Route Tests
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = create_router(test_state().await);

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_metric_definitions() {
    let app = create_router(test_state().await);

    let (status, body) = get(app, "/metrics/definitions").await;

    assert_eq!(status, StatusCode::OK);
    let defs = body.as_array().unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0]["name"], "ndcg");
    assert_eq!(defs[0]["label"], "nDCG@5");
    assert_eq!(defs[0]["sort_key"], true);
    assert_eq!(defs[1]["name"], "f1");
    assert_eq!(defs[1]["sort_key"], false);
}

#[tokio::test]
async fn test_empty_leaderboard() {
    let app = create_router(test_state().await);

    let (status, body) = get(app, "/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_leaderboard_shows_best_score() {
    let app = create_router(seeded_state().await);

    let (status, body) = get(app, "/leaderboard").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["user_id"], "alice");
    assert_eq!(entries[0]["n_submit"], 2);
    assert_eq!(entries[0]["score"]["ndcg"], 0.6);
}

#[tokio::test]
async fn test_user_scores_in_submission_and_rank_order() {
    let state = seeded_state().await;

    let (status, body) = get(create_router(state.clone()), "/users/alice/scores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["print_name"], "Alice");
    assert!(body["user"].get("password").is_none());
    let ndcg: Vec<f64> = body["scores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["ndcg"].as_f64().unwrap())
        .collect();
    assert_eq!(ndcg, vec![0.3, 0.6]);

    let (_, body) = get(create_router(state), "/users/alice/scores?ranked=true").await;
    assert_eq!(body["scores"][0]["ndcg"], 0.6);
}

#[tokio::test]
async fn test_unknown_user_scores_not_found() {
    let app = create_router(test_state().await);

    let (status, body) = get(app, "/users/ghost/scores").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
