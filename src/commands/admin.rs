//! Admin command - Tabular dumps of stored records.

use crate::cli::args::{AdminArgs, AdminView};
use crate::config::Config;
use crate::domain::render_table;
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the admin command
pub async fn execute(args: AdminArgs, config: Config) -> AppResult<()> {
    let services = super::connect_services(&config).await?;

    let admin = services
        .accounts()
        .require_admin(&args.as_user, &args.password)
        .await?;
    tracing::debug!(admin = %admin, "Admin view authorized");

    let table = match args.view {
        AdminView::Users => render_table(&services.accounts().list_users().await?),
        AdminView::Scores => render_table(&services.scores().all_scores().await?),
    };
    print!("{}", table);

    Ok(())
}
