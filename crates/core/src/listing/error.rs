use thiserror::Error;

/// Errors that can occur when validating or mutating a user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("First name cannot be empty")]
    EmptyFirstName,
    #[error("First name too long (max 50 characters)")]
    FirstNameTooLong,
    #[error("Last name cannot be empty")]
    EmptyLastName,
    #[error("Last name too long (max 50 characters)")]
    LastNameTooLong,
    #[error("Password is required")]
    EmptyPassword,
    #[error("Password cannot be changed through a profile update")]
    PasswordChangeNotAllowed,
    #[error("User must be an owner to own places")]
    NotAnOwner,
    #[error("is_owner is set by listing a place")]
    OwnerFlagNotSettable,
}

/// Errors that can occur when validating or mutating a place.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceError {
    #[error("Place title cannot be empty")]
    EmptyTitle,
    #[error("Place title too long (max 100 characters)")]
    TitleTooLong,
    #[error("Place description too long (max 1024 characters)")]
    DescriptionTooLong,
    #[error("Price must be a positive number: {0}")]
    InvalidPrice(f64),
    #[error("Latitude must be between -90 and 90: {0}")]
    InvalidLatitude(f64),
    #[error("Longitude must be between -180 and 180: {0}")]
    InvalidLongitude(f64),
}

/// Errors that can occur when validating or mutating a review.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Review text cannot be empty")]
    EmptyText,
    #[error("Review text too long (max 1024 characters)")]
    TextTooLong,
    #[error("Rating must be between 1 and 5")]
    InvalidRating(i64),
}

/// Errors that can occur when validating or mutating an amenity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmenityError {
    #[error("Amenity name cannot be empty")]
    EmptyName,
    #[error("Amenity name too long (max 50 characters)")]
    NameTooLong,
    #[error("Amenity description too long (max 255 characters)")]
    DescriptionTooLong,
}
