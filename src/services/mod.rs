//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! the `UnitOfWork` abstraction for repository access and transactions.

mod account_service;
pub mod container;
mod score_service;

pub use account_service::{AccountManager, AccountService};
pub use container::{ServiceContainer, Services};
pub use score_service::{ScoreManager, ScoreService};
