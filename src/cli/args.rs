//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Leaderboard - users, scores and rankings
#[derive(Parser, Debug)]
#[command(name = "leaderboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Manage user accounts
    User(UserArgs),

    /// Submit and inspect scores
    Score(ScoreArgs),

    /// Tabular dumps of stored records
    Admin(AdminArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "SERVER_PORT")]
    pub port: u16,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the user command
#[derive(Parser, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub action: UserAction,
}

/// User account actions
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Provision a new account
    Create {
        /// Login name
        user_id: String,
        /// Display name
        print_name: String,
        /// Initial password
        #[arg(long, env = "LEADERBOARD_PASSWORD", hide_env_values = true)]
        password: String,
        /// Grant admin access
        #[arg(long)]
        admin: bool,
    },
    /// List accounts
    List,
    /// Replace an account's password
    SetPassword {
        user_id: String,
        #[arg(long, env = "LEADERBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Grant or revoke admin access
    SetAdmin {
        user_id: String,
        #[arg(action = clap::ArgAction::Set)]
        is_admin: bool,
    },
    /// Check a password against the stored hash
    Verify {
        user_id: String,
        #[arg(long, env = "LEADERBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// Arguments for the score command
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    #[command(subcommand)]
    pub action: ScoreAction,
}

/// Score actions
#[derive(Subcommand, Debug)]
pub enum ScoreAction {
    /// Record an evaluation result given as a JSON object
    Submit {
        /// e.g. '{"user_primary_key": 1, "comment": "run 1", "ndcg": 0.8, "f1": 0.6}'
        #[arg(long)]
        result: String,
    },
    /// List one user's scores
    List {
        user_id: String,
        /// Order by the leaderboard sort key
        #[arg(long)]
        ranked: bool,
    },
    /// Print the leaderboard
    Leaderboard,
}

/// Arguments for the admin command
#[derive(Parser, Debug)]
pub struct AdminArgs {
    /// Admin account performing the dump
    #[arg(long, env = "LEADERBOARD_ADMIN")]
    pub as_user: String,

    /// Password of the admin account
    #[arg(long, env = "LEADERBOARD_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[command(subcommand)]
    pub view: AdminView,
}

/// Tables available to admins
#[derive(Subcommand, Debug)]
pub enum AdminView {
    /// All users
    Users,
    /// All scores
    Scores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_create() {
        let cli = Cli::parse_from([
            "leaderboard", "user", "create", "alice", "Alice", "--password", "pw", "--admin",
        ]);
        match cli.command {
            Commands::User(UserArgs {
                action: UserAction::Create { user_id, admin, .. },
            }) => {
                assert_eq!(user_id, "alice");
                assert!(admin);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_set_admin_value() {
        let cli = Cli::parse_from(["leaderboard", "user", "set-admin", "bob", "false"]);
        assert!(matches!(
            cli.command,
            Commands::User(UserArgs {
                action: UserAction::SetAdmin { is_admin: false, .. }
            })
        ));
    }

    #[test]
    fn test_parse_admin_credentials() {
        let cli = Cli::parse_from([
            "leaderboard", "admin", "--as-user", "root", "--password", "pw", "scores",
        ]);
        match cli.command {
            Commands::Admin(AdminArgs {
                as_user,
                password,
                view: AdminView::Scores,
            }) => {
                assert_eq!(as_user, "root");
                assert_eq!(password, "pw");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_score_list_ranked() {
        let cli = Cli::parse_from(["leaderboard", "-v", "score", "list", "carol", "--ranked"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Score(ScoreArgs {
                action: ScoreAction::List { ranked: true, .. }
            })
        ));
    }
}
