//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence. The user to
//! score relationship is an explicit foreign key plus
//! [`ScoreRepository::list_by_user`].

pub(crate) mod entities;
pub(crate) mod score_repository;
pub(crate) mod user_repository;

pub use score_repository::{ScoreRepository, ScoreStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use score_repository::MockScoreRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
