//! Place CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Place listing commands.
#[derive(Debug, Parser)]
pub struct PlacesCommand {
    #[command(subcommand)]
    pub action: PlacesAction,
}

/// Available place actions.
#[derive(Debug, Subcommand)]
pub enum PlacesAction {
    /// List all places.
    List,
    /// Create a place owned by the authenticated user.
    Create {
        #[arg(long)]
        title: String,
        /// Price per night.
        #[arg(long)]
        price: f64,
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
        #[arg(long)]
        description: Option<String>,
        /// Amenity ID, repeatable.
        #[arg(long = "amenity")]
        amenities: Vec<Uuid>,
    },
    /// Get place by ID.
    Get {
        /// Place ID.
        id: Uuid,
    },
}
