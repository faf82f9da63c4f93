//! Migrate command - Manual schema control.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match &args.action {
        MigrateAction::Up => db.run_migrations().await?,
        MigrateAction::Down => db.rollback_migration().await?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping users and scores before re-applying migrations");
            db.fresh_migrations().await?
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            let width = status.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            for (name, applied) in status {
                let state = if applied { "applied" } else { "pending" };
                println!("{:<width$}  {}", name, state, width = width);
            }
            return Ok(());
        }
    }

    tracing::info!(action = ?args.action, "Migration finished");
    Ok(())
}
