use thiserror::Error;

use hbnb_core::auth::AuthError;
use hbnb_core::listing::{AmenityError, PlaceError, ReviewError, UserError};
use hbnb_core::storage::RepositoryError;

/// Errors returned by facade operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Place(#[from] PlaceError),
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Amenity(#[from] AmenityError),
    /// A referenced entity in the payload (owner, amenity) does not exist.
    #[error("{0}")]
    InvalidReference(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    /// Duplicate email or amenity name.
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{entity} not found"))
    }

    pub fn forbidden() -> Self {
        Self::Forbidden("Action not allowed".to_string())
    }
}

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// Validation failures, dangling references and duplicates are client errors
/// (400); repository failures use [`RepositoryError::status_code`].
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::User(_)
        | ServiceError::Place(_)
        | ServiceError::Review(_)
        | ServiceError::Amenity(_)
        | ServiceError::InvalidReference(_)
        | ServiceError::Conflict(_) => 400,
        ServiceError::Forbidden(_) => 403,
        ServiceError::NotFound(_) => 404,
        ServiceError::Auth(AuthError::InvalidCredentials) => 401,
        ServiceError::Auth(_) => 500,
        ServiceError::Repository(e) => e.status_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ServiceError::User(UserError::InvalidEmail("x".into())), 400)]
    #[case(ServiceError::Review(ReviewError::InvalidRating(6)), 400)]
    #[case(ServiceError::InvalidReference("Owner not found".into()), 400)]
    #[case(ServiceError::Conflict("Email already registered".into()), 400)]
    #[case(ServiceError::Auth(AuthError::InvalidCredentials), 401)]
    #[case(ServiceError::forbidden(), 403)]
    #[case(ServiceError::not_found("Place"), 404)]
    #[case(ServiceError::Auth(AuthError::PasswordHash("salt".into())), 500)]
    #[case(ServiceError::Repository(RepositoryError::already_exists("User", "x")), 409)]
    #[case(ServiceError::Repository(RepositoryError::ConnectionFailed("down".into())), 503)]
    fn test_status_codes(#[case] error: ServiceError, #[case] expected: u16) {
        assert_eq!(service_error_to_status_code(&error), expected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ServiceError::not_found("Review").to_string(), "Review not found");
        assert_eq!(ServiceError::forbidden().to_string(), "Action not allowed");
        assert_eq!(
            ServiceError::Review(ReviewError::InvalidRating(0)).to_string(),
            "Rating must be between 1 and 5"
        );
    }
}
