//! CLI command definitions.

pub mod amenities;
pub mod places;
pub mod reviews;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the HBnB API.
#[derive(Debug, Parser)]
#[command(name = "hbnb-client")]
#[command(about = "CLI client for the HBnB API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "HBNB_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Access token returned by `login`.
    #[arg(long, env = "HBNB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Exchange email and password for an access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HBNB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// User management.
    Users(users::UsersCommand),
    /// Place listings.
    Places(places::PlacesCommand),
    /// Reviews.
    Reviews(reviews::ReviewsCommand),
    /// Amenities.
    Amenities(amenities::AmenitiesCommand),
}
