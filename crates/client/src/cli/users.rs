//! User CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List all users.
    List,
    /// Register a new user.
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, env = "HBNB_PASSWORD", hide_env_values = true)]
        password: String,
        /// Create an administrator (needs an admin token).
        #[arg(long)]
        admin: bool,
    },
    /// Get user by ID.
    Get {
        /// User ID.
        id: Uuid,
    },
}
