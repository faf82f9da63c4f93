//! Database connection and schema management.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Shared connection pool plus the schema operations the CLI exposes.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect to `DATABASE_URL` and bring the schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        Self::connect_with(ConnectOptions::new(config.database_url.clone())).await
    }

    /// Connect with explicit pool options and bring the schema up to date.
    pub async fn connect_with(options: ConnectOptions) -> Result<Self, DbErr> {
        let db = Self {
            connection: SeaDatabase::connect(options).await?,
        };
        db.run_migrations().await?;
        tracing::info!(backend = ?db.connection.get_database_backend(), "Database ready");
        Ok(db)
    }

    /// Connect and leave the schema alone; `migrate` drives it by hand.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        Ok(Self {
            connection: SeaDatabase::connect(&config.database_url).await?,
        })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Owned handle for building repositories.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Revert the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every known migration in order, with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let migrations = Migrator::get_migration_with_status(&self.connection).await?;
        Ok(migrations
            .iter()
            .map(|m| (m.name().to_string(), m.status() == MigrationStatus::Applied))
            .collect())
    }

    /// Drop every table, then apply all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        self.connection
            .execute(Statement::from_string(backend, "SELECT 1"))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> Database {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);
        Database::connect_with(options).await.unwrap()
    }

    #[tokio::test]
    async fn test_connect_applies_all_migrations() {
        let db = memory_db().await;

        let status = db.migration_status().await.unwrap();
        assert_eq!(status.len(), Migrator::migrations().len());
        assert!(status.iter().all(|(_, applied)| *applied));
        assert!(db.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_rollback_marks_last_pending() {
        let db = memory_db().await;

        db.rollback_migration().await.unwrap();

        let status = db.migration_status().await.unwrap();
        let (last, applied) = status.last().unwrap();
        assert!(last.contains("create_scores_table"));
        assert!(!applied);
    }
}
