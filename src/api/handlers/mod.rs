//! HTTP request handlers.

pub mod leaderboard_handler;
pub mod score_handler;

pub use leaderboard_handler::leaderboard_routes;
pub use score_handler::user_routes;
