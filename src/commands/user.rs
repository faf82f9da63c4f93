//! User command - Account provisioning and credentials.

use crate::cli::args::{UserAction, UserArgs};
use crate::config::Config;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    let accounts = super::connect_services(&config).await?.accounts();

    match args.action {
        UserAction::Create {
            user_id,
            print_name,
            password,
            admin,
        } => {
            let user = accounts
                .provision(CreateUser {
                    user_id,
                    password,
                    print_name,
                    is_admin: admin,
                })
                .await?;
            println!("Created user {} (id {})", user, user.id);
        }
        UserAction::List => {
            for user in accounts.list_users().await? {
                let view = UserResponse::from(&user);
                println!(
                    "{}\t{}\tadmin={}\tsubmissions={}",
                    view.user_id, view.print_name, view.is_admin, view.n_submit
                );
            }
        }
        UserAction::SetPassword { user_id, password } => {
            let user = accounts.change_password(&user_id, &password).await?;
            println!("Password updated for {}", user);
        }
        UserAction::SetAdmin { user_id, is_admin } => {
            let user = accounts.set_admin(&user_id, is_admin).await?;
            println!("{} admin={}", user, user.is_admin);
        }
        UserAction::Verify { user_id, password } => {
            let user = accounts.authenticate(&user_id, &password).await?;
            println!("Credentials valid for {}", user.session_id());
        }
    }

    Ok(())
}
