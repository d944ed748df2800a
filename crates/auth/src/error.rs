use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Auth errors for the hbnb_auth crate.
///
/// This wraps the core `AuthError` and adds crate-specific error variants
/// for I/O operations that can't be in the functional core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the core auth module (credentials, token checks, etc.)
    #[error(transparent)]
    Core(#[from] hbnb_core::auth::AuthError),

    /// User lookup failed in the repository
    #[error(transparent)]
    Repository(#[from] hbnb_core::storage::RepositoryError),

    /// Malformed request body
    #[error("{0}")]
    InvalidPayload(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        use hbnb_core::auth::AuthError as CoreError;

        let (status, message) = match &self {
            AuthError::Core(core_err) => match core_err {
                CoreError::InvalidCredentials => {
                    tracing::warn!("Login rejected: invalid credentials");
                    (StatusCode::UNAUTHORIZED, self.to_string())
                }
                CoreError::MissingToken
                | CoreError::InvalidToken(_)
                | CoreError::TokenExpired
                | CoreError::UserNotFound => (StatusCode::UNAUTHORIZED, self.to_string()),
                CoreError::PasswordHash(_) | CoreError::Storage(_) | CoreError::TokenLifetime => {
                    tracing::error!("Auth error: {}", self);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            AuthError::Repository(_) => {
                tracing::error!("Repository error during auth: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AuthError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AuthError::Config(_) => {
                tracing::error!("Config error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_core::auth::AuthError as CoreError;

    #[test]
    fn invalid_credentials_is_unauthorized() {
        let response = AuthError::from(CoreError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let response = AuthError::from(CoreError::TokenExpired).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn config_error_is_internal() {
        let response = AuthError::Config("missing secret".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn repository_error_is_internal() {
        let error = hbnb_core::storage::RepositoryError::QueryFailed("locked".into());
        let response = AuthError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
