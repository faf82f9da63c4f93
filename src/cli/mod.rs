//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `user` - Account provisioning and credentials
//! - `score` - Submissions and rankings
//! - `admin` - Tabular record dumps

pub mod args;

pub use args::{Cli, Commands};
