//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AccountService, ScoreService, ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Account service
    pub account_service: Arc<dyn AccountService>,
    /// Score service
    pub score_service: Arc<dyn ScoreService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Build state with services wired over the given database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::new(services.accounts(), services.scores(), database)
    }

    /// Create application state with manually injected services.
    pub fn new(
        account_service: Arc<dyn AccountService>,
        score_service: Arc<dyn ScoreService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            account_service,
            score_service,
            database,
        }
    }
}
