//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, SecondsFormat, Utc};
use hbnb_core::listing::{Amenity, Place, Review, User};
use hbnb_core::storage::RepositoryError;
use rusqlite::types::Type;
use rusqlite::Row;
use uuid::Uuid;

// ============================================================================
// Entity conversions
// ============================================================================

/// Convert a SQLite row to a User.
///
/// Expected columns: id, email, first_name, last_name, password_hash, is_admin,
/// is_owner, owned_places, rented_places, created_at, updated_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let id: String = row.get(0)?;
    let owned_places: String = row.get(7)?;
    let rented_places: String = row.get(8)?;
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;

    Ok(User {
        id: parse_uuid(&id)?,
        email: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        password_hash: row.get(4)?,
        is_admin: row.get(5)?,
        is_owner: row.get(6)?,
        owned_places: parse_id_list(&owned_places)?,
        rented_places: parse_id_list(&rented_places)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a Place.
///
/// Expected columns: id, title, description, price, latitude, longitude,
/// owner_id, amenities, reviews, created_at, updated_at
pub fn row_to_place(row: &Row) -> rusqlite::Result<Place> {
    let id: String = row.get(0)?;
    let owner_id: String = row.get(6)?;
    let amenities: String = row.get(7)?;
    let reviews: String = row.get(8)?;
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;

    Ok(Place {
        id: parse_uuid(&id)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
        owner_id: parse_uuid(&owner_id)?,
        amenities: parse_id_list(&amenities)?,
        reviews: parse_id_list(&reviews)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a Review.
///
/// Expected columns: id, text, rating, user_id, place_id, created_at, updated_at
pub fn row_to_review(row: &Row) -> rusqlite::Result<Review> {
    let id: String = row.get(0)?;
    let user_id: String = row.get(3)?;
    let place_id: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Review {
        id: parse_uuid(&id)?,
        text: row.get(1)?,
        rating: row.get(2)?,
        user_id: parse_uuid(&user_id)?,
        place_id: parse_uuid(&place_id)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to an Amenity.
///
/// Expected columns: id, name, description, created_at, updated_at
pub fn row_to_amenity(row: &Row) -> rusqlite::Result<Amenity> {
    let id: String = row.get(0)?;
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(Amenity {
        id: parse_uuid(&id)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Serialize a list of ids to a JSON array.
pub fn id_list_to_json(ids: &[Uuid]) -> Result<String, RepositoryError> {
    serde_json::to_string(ids).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

fn parse_id_list(json: &str) -> rusqlite::Result<Vec<Uuid>> {
    serde_json::from_str(json).map_err(conversion_failure)
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(conversion_failure)
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(conversion_failure)
}

fn conversion_failure<E>(e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed nanosecond precision keeps the text sortable, so `ORDER BY created_at`
/// matches chronological order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
