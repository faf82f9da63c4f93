//! Service Container - Centralized service access.
//!
//! Builds every service over one shared Unit of Work and hands them out as
//! trait objects.

use std::sync::Arc;

use super::{AccountManager, AccountService, ScoreManager, ScoreService};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get account service
    fn accounts(&self) -> Arc<dyn AccountService>;

    /// Get score service
    fn scores(&self) -> Arc<dyn ScoreService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    account_service: Arc<dyn AccountService>,
    score_service: Arc<dyn ScoreService>,
}

impl Services {
    /// Create a service container from already-built services
    pub fn new(
        account_service: Arc<dyn AccountService>,
        score_service: Arc<dyn ScoreService>,
    ) -> Self {
        Self {
            account_service,
            score_service,
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let account_service = Arc::new(AccountManager::new(uow.clone()));
        let score_service = Arc::new(ScoreManager::new(uow));

        Self {
            account_service,
            score_service,
        }
    }
}

impl ServiceContainer for Services {
    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn scores(&self) -> Arc<dyn ScoreService> {
        self.score_service.clone()
    }
}
