//! Review CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Review commands.
#[derive(Debug, Parser)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub action: ReviewsAction,
}

/// Available review actions.
#[derive(Debug, Subcommand)]
pub enum ReviewsAction {
    /// List all reviews.
    List,
    /// List the reviews of a place.
    ForPlace {
        /// Place ID.
        place_id: Uuid,
    },
    /// Review a place as the authenticated user.
    Create {
        #[arg(long)]
        place_id: Uuid,
        #[arg(long)]
        text: String,
        /// Rating from 1 to 5.
        #[arg(long)]
        rating: i64,
    },
    /// Delete review by ID.
    Delete {
        /// Review ID.
        id: Uuid,
    },
}
