//! Domain layer - Core business entities and logic
//!
//! Entities and value objects independent of storage: users with hashed
//! passwords, scores with their metric metadata, leaderboard ordering and
//! the tabular view used by the admin commands.

pub mod leaderboard;
pub mod password;
pub mod score;
pub mod tabular;
pub mod user;

pub use leaderboard::{rank_best_scores, sort_by_rank, LeaderboardEntry};
pub use password::Password;
pub use score::{Metric, MetricDefinition, Score, ScoreSubmission};
pub use tabular::{render_table, TabularRecord};
pub use user::{CreateUser, User, UserResponse};
