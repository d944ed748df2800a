//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Not authenticated: {message}")]
    Unauthorized { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
