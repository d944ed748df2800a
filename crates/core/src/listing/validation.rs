//! Pure validation rules for listing entities.
//!
//! Constructors and setters on the entity types delegate here so the same
//! rule applies whether a value arrives on creation or on update.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{AmenityError, PlaceError, ReviewError, UserError};

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_PLACE_DESCRIPTION_LENGTH: usize = 1024;
pub const MAX_REVIEW_TEXT_LENGTH: usize = 1024;
pub const MAX_AMENITY_NAME_LENGTH: usize = 50;
pub const MAX_AMENITY_DESCRIPTION_LENGTH: usize = 255;

/// `local@domain.tld`: no whitespace, a single `@`, and a dot in the domain.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Validates an email address and returns it trimmed.
pub fn validate_email(email: &str) -> Result<String, UserError> {
    let email = email.trim();
    if EMAIL_RE.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(UserError::InvalidEmail(email.to_string()))
    }
}

pub fn validate_first_name(name: &str) -> Result<String, UserError> {
    validate_bounded(name, MAX_NAME_LENGTH)
        .map_err(|empty| if empty { UserError::EmptyFirstName } else { UserError::FirstNameTooLong })
}

pub fn validate_last_name(name: &str) -> Result<String, UserError> {
    validate_bounded(name, MAX_NAME_LENGTH)
        .map_err(|empty| if empty { UserError::EmptyLastName } else { UserError::LastNameTooLong })
}

/// Validates a plaintext password before it is hashed.
pub fn validate_password(password: &str) -> Result<(), UserError> {
    if password.is_empty() {
        return Err(UserError::EmptyPassword);
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<String, PlaceError> {
    validate_bounded(title, MAX_TITLE_LENGTH)
        .map_err(|empty| if empty { PlaceError::EmptyTitle } else { PlaceError::TitleTooLong })
}

/// An absent description is valid; a present one is bounded in length.
pub fn validate_place_description(description: Option<&str>) -> Result<(), PlaceError> {
    match description {
        Some(d) if d.chars().count() > MAX_PLACE_DESCRIPTION_LENGTH => {
            Err(PlaceError::DescriptionTooLong)
        }
        _ => Ok(()),
    }
}

pub fn validate_price(price: f64) -> Result<f64, PlaceError> {
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(PlaceError::InvalidPrice(price))
    }
}

pub fn validate_latitude(latitude: f64) -> Result<f64, PlaceError> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(PlaceError::InvalidLatitude(latitude))
    }
}

pub fn validate_longitude(longitude: f64) -> Result<f64, PlaceError> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(PlaceError::InvalidLongitude(longitude))
    }
}

/// Ratings travel as JSON integers; anything outside `1..=5` is rejected
/// before narrowing to `u8`.
pub fn validate_rating(rating: i64) -> Result<u8, ReviewError> {
    match u8::try_from(rating) {
        Ok(r @ 1..=5) => Ok(r),
        _ => Err(ReviewError::InvalidRating(rating)),
    }
}

pub fn validate_review_text(text: &str) -> Result<String, ReviewError> {
    validate_bounded(text, MAX_REVIEW_TEXT_LENGTH)
        .map_err(|empty| if empty { ReviewError::EmptyText } else { ReviewError::TextTooLong })
}

pub fn validate_amenity_name(name: &str) -> Result<String, AmenityError> {
    validate_bounded(name, MAX_AMENITY_NAME_LENGTH)
        .map_err(|empty| if empty { AmenityError::EmptyName } else { AmenityError::NameTooLong })
}

pub fn validate_amenity_description(description: Option<&str>) -> Result<(), AmenityError> {
    match description {
        Some(d) if d.chars().count() > MAX_AMENITY_DESCRIPTION_LENGTH => {
            Err(AmenityError::DescriptionTooLong)
        }
        _ => Ok(()),
    }
}

/// Trims `value` and checks it is non-empty and at most `max` characters.
/// The error is `true` when the value was empty, `false` when too long.
fn validate_bounded(value: &str, max: usize) -> Result<String, bool> {
    let value = value.trim();
    if value.is_empty() {
        return Err(true);
    }
    if value.chars().count() > max {
        return Err(false);
    }
    Ok(value.to_string())
}
