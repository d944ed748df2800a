//! hbnb_client - CLI client for the HBnB API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::HbnbClient;
pub use error::{ClientError, Result};
