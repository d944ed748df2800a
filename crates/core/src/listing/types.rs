use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{AmenityError, PlaceError, ReviewError, UserError};
use super::validation::{
    validate_amenity_description, validate_amenity_name, validate_email, validate_first_name,
    validate_last_name, validate_latitude, validate_longitude, validate_place_description,
    validate_price, validate_rating, validate_review_text, validate_title,
};

/// A registered account. Owners list the places they offer, renters the
/// places they booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 PHC string. Never leaves the process.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub is_admin: bool,
    pub is_owner: bool,
    pub owned_places: Vec<Uuid>,
    pub rented_places: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a validated user. The password must already be hashed.
    pub fn new(
        email: &str,
        first_name: &str,
        last_name: &str,
        password_hash: impl Into<String>,
    ) -> Result<Self, UserError> {
        let password_hash = password_hash.into();
        if password_hash.is_empty() {
            return Err(UserError::EmptyPassword);
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            email: validate_email(email)?,
            first_name: validate_first_name(first_name)?,
            last_name: validate_last_name(last_name)?,
            password_hash,
            is_admin: false,
            is_owner: false,
            owned_places: Vec::new(),
            rented_places: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Marks this user as an administrator.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Sets a specific ID for this user (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), UserError> {
        self.email = validate_email(email)?;
        self.touch();
        Ok(())
    }

    pub fn set_first_name(&mut self, first_name: &str) -> Result<(), UserError> {
        self.first_name = validate_first_name(first_name)?;
        self.touch();
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: &str) -> Result<(), UserError> {
        self.last_name = validate_last_name(last_name)?;
        self.touch();
        Ok(())
    }

    pub fn become_owner(&mut self) {
        if !self.is_owner {
            self.is_owner = true;
            self.touch();
        }
    }

    /// Records a place as owned by this user. The user must already be an owner.
    pub fn add_owned_place(&mut self, place_id: Uuid) -> Result<(), UserError> {
        if !self.is_owner {
            return Err(UserError::NotAnOwner);
        }
        if !self.owned_places.contains(&place_id) {
            self.owned_places.push(place_id);
            self.touch();
        }
        Ok(())
    }

    pub fn remove_owned_place(&mut self, place_id: Uuid) {
        let before = self.owned_places.len();
        self.owned_places.retain(|id| *id != place_id);
        if self.owned_places.len() != before {
            self.touch();
        }
    }

    /// Records a rental. Renting the same place twice keeps a single entry.
    pub fn rent_place(&mut self, place_id: Uuid) {
        if !self.rented_places.contains(&place_id) {
            self.rented_places.push(place_id);
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A listing offered by an owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Price per night.
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub amenities: Vec<Uuid>,
    pub reviews: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Place {
    pub fn new(
        title: &str,
        price: f64,
        latitude: f64,
        longitude: f64,
        owner_id: Uuid,
    ) -> Result<Self, PlaceError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: validate_title(title)?,
            description: None,
            price: validate_price(price)?,
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
            owner_id,
            amenities: Vec::new(),
            reviews: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Sets the description for this place.
    pub fn with_description(mut self, description: Option<String>) -> Result<Self, PlaceError> {
        validate_place_description(description.as_deref())?;
        self.description = description;
        Ok(self)
    }

    /// Sets a specific ID for this place (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), PlaceError> {
        self.title = validate_title(title)?;
        self.touch();
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) -> Result<(), PlaceError> {
        validate_place_description(description.as_deref())?;
        self.description = description;
        self.touch();
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), PlaceError> {
        self.price = validate_price(price)?;
        self.touch();
        Ok(())
    }

    pub fn set_latitude(&mut self, latitude: f64) -> Result<(), PlaceError> {
        self.latitude = validate_latitude(latitude)?;
        self.touch();
        Ok(())
    }

    pub fn set_longitude(&mut self, longitude: f64) -> Result<(), PlaceError> {
        self.longitude = validate_longitude(longitude)?;
        self.touch();
        Ok(())
    }

    pub fn set_owner(&mut self, owner_id: Uuid) {
        self.owner_id = owner_id;
        self.touch();
    }

    pub fn add_amenity(&mut self, amenity_id: Uuid) {
        if !self.amenities.contains(&amenity_id) {
            self.amenities.push(amenity_id);
            self.touch();
        }
    }

    pub fn add_review(&mut self, review_id: Uuid) {
        if !self.reviews.contains(&review_id) {
            self.reviews.push(review_id);
            self.touch();
        }
    }

    pub fn remove_review(&mut self, review_id: Uuid) {
        let before = self.reviews.len();
        self.reviews.retain(|id| *id != review_id);
        if self.reviews.len() != before {
            self.touch();
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A guest's rating of a place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    /// Always within `1..=5`.
    pub rating: u8,
    pub user_id: Uuid,
    pub place_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn new(text: &str, rating: i64, user_id: Uuid, place_id: Uuid) -> Result<Self, ReviewError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            text: validate_review_text(text)?,
            rating: validate_rating(rating)?,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ReviewError> {
        self.text = validate_review_text(text)?;
        self.touch();
        Ok(())
    }

    pub fn set_rating(&mut self, rating: i64) -> Result<(), ReviewError> {
        self.rating = validate_rating(rating)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A feature a place can offer (Wi-Fi, pool, parking...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Amenity {
    pub fn new(name: &str) -> Result<Self, AmenityError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: validate_amenity_name(name)?,
            description: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn with_description(mut self, description: Option<String>) -> Result<Self, AmenityError> {
        validate_amenity_description(description.as_deref())?;
        self.description = description;
        Ok(self)
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), AmenityError> {
        self.name = validate_amenity_name(name)?;
        self.touch();
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) -> Result<(), AmenityError> {
        validate_amenity_description(description.as_deref())?;
        self.description = description;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
