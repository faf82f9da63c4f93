//! Leaderboard - user accounts, score submissions and rankings
//!
//! Users submit evaluation results (nDCG@5 and F1); each user's best result
//! is ranked on a shared leaderboard.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, passwords, scores and ranking rules
//! - **services**: Account and score use cases
//! - **infra**: Database, migrations, repositories and unit of work
//! - **api**: Read-only HTTP routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create a user
//! leaderboard user create alice "Alice" --password s3cret
//!
//! # Record a result
//! leaderboard score submit --result '{"user_primary_key": 1, "comment": null, "ndcg": 0.61, "f1": 0.42}'
//!
//! # Start the server
//! leaderboard serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{LeaderboardEntry, Metric, Password, Score, ScoreSubmission, User};
pub use errors::{AppError, AppResult};
