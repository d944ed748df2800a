use clap::{Parser, Subcommand};

/// Amenity commands.
#[derive(Debug, Parser)]
pub struct AmenitiesCommand {
    #[command(subcommand)]
    pub action: AmenitiesAction,
}

#[derive(Debug, Subcommand)]
pub enum AmenitiesAction {
    /// List all amenities.
    List,
    /// Create an amenity.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}
