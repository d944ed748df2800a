//! API request and response payloads.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{AmenityError, PlaceError, ReviewError, UserError};
use super::types::{Amenity, Place, Review, User};
use crate::serde::deserialize_optional_string;

/// Request payload for registering a user.
///
/// `is_owner` is accepted for older clients that send `false`; ownership
/// itself only comes from listing a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Only honoured when the caller is an administrator.
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
}

impl CreateUserRequest {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: password.into(),
            is_admin: false,
            is_owner: None,
        }
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Convert into a User once the password has been hashed.
    pub fn into_user(self, password_hash: String) -> Result<User, UserError> {
        if self.is_owner == Some(true) {
            return Err(UserError::OwnerFlagNotSettable);
        }
        Ok(User::new(&self.email, &self.first_name, &self.last_name, password_hash)?
            .with_admin(self.is_admin))
    }
}

/// Request payload for updating a user profile.
///
/// `password` is accepted on the wire only so it can be refused explicitly;
/// any other unknown attribute is rejected at deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Apply updates to an existing user. Nothing is changed unless every
    /// field validates.
    pub fn apply_to(self, user: &mut User) -> Result<(), UserError> {
        if self.password.is_some() {
            return Err(UserError::PasswordChangeNotAllowed);
        }
        let mut updated = user.clone();
        if let Some(email) = self.email {
            updated.set_email(&email)?;
        }
        if let Some(first_name) = self.first_name {
            updated.set_first_name(&first_name)?;
        }
        if let Some(last_name) = self.last_name {
            updated.set_last_name(&last_name)?;
        }
        *user = updated;
        Ok(())
    }
}

/// Request payload for creating a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaceRequest {
    pub title: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Defaults to the caller. Administrators may list on behalf of another user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<Uuid>,
}

impl CreatePlaceRequest {
    pub fn new(title: impl Into<String>, price: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            title: title.into(),
            description: None,
            price,
            latitude,
            longitude,
            owner_id: None,
            amenities: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_owner(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_amenities(mut self, amenities: Vec<Uuid>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Convert into a Place owned by `owner_id`. Amenity existence is the
    /// caller's concern.
    pub fn into_place(self, owner_id: Uuid) -> Result<Place, PlaceError> {
        let mut place = Place::new(
            &self.title,
            self.price,
            self.latitude,
            self.longitude,
            owner_id,
        )?
        .with_description(self.description)?;
        for amenity_id in self.amenities {
            place.add_amenity(amenity_id);
        }
        Ok(place)
    }
}

/// Request payload for updating a place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlaceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
}

impl UpdatePlaceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_owner(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Apply updates to an existing place. Nothing is changed unless every
    /// field validates. An empty description clears it.
    pub fn apply_to(self, place: &mut Place) -> Result<(), PlaceError> {
        let mut updated = place.clone();
        if let Some(title) = self.title {
            updated.set_title(&title)?;
        }
        if let Some(description) = self.description {
            let description = Some(description).filter(|d| !d.trim().is_empty());
            updated.set_description(description)?;
        }
        if let Some(price) = self.price {
            updated.set_price(price)?;
        }
        if let Some(latitude) = self.latitude {
            updated.set_latitude(latitude)?;
        }
        if let Some(longitude) = self.longitude {
            updated.set_longitude(longitude)?;
        }
        if let Some(owner_id) = self.owner_id {
            updated.set_owner(owner_id);
        }
        *place = updated;
        Ok(())
    }
}

/// Request payload for creating a review. The author is always the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub rating: i64,
    pub place_id: Uuid,
}

impl CreateReviewRequest {
    pub fn new(place_id: Uuid, text: impl Into<String>, rating: i64) -> Self {
        Self {
            text: text.into(),
            rating,
            place_id,
        }
    }

    pub fn into_review(self, user_id: Uuid) -> Result<Review, ReviewError> {
        Review::new(&self.text, self.rating, user_id, self.place_id)
    }
}

/// Request payload for updating a review.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateReviewRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

impl UpdateReviewRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn apply_to(self, review: &mut Review) -> Result<(), ReviewError> {
        let mut updated = review.clone();
        if let Some(text) = self.text {
            updated.set_text(&text)?;
        }
        if let Some(rating) = self.rating {
            updated.set_rating(rating)?;
        }
        *review = updated;
        Ok(())
    }
}

/// Request payload for creating an amenity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAmenityRequest {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl CreateAmenityRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn into_amenity(self) -> Result<Amenity, AmenityError> {
        Amenity::new(&self.name)?.with_description(self.description)
    }
}

/// Request payload for updating an amenity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateAmenityRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateAmenityRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn apply_to(self, amenity: &mut Amenity) -> Result<(), AmenityError> {
        let mut updated = amenity.clone();
        if let Some(name) = self.name {
            updated.set_name(&name)?;
        }
        if let Some(description) = self.description {
            let description = Some(description).filter(|d| !d.trim().is_empty());
            updated.set_description(description)?;
        }
        *amenity = updated;
        Ok(())
    }
}

/// Credentials exchanged for an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Plain informational response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new("jane@example.com", "Jane", "Doe", "hash").unwrap()
    }

    #[test]
    fn test_create_user_request_into_user() {
        let user = CreateUserRequest::new("jane@example.com", "Jane", "Doe", "secret")
            .into_user("hashed".to_string())
            .unwrap();
        assert_eq!(user.password_hash, "hashed");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_create_user_request_is_admin_defaults_false() {
        let json = r#"{"email":"a@b.co","first_name":"A","last_name":"B","password":"x"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert!(!request.is_admin);
    }

    #[test]
    fn test_create_user_request_rejects_unknown_attribute() {
        let json = r#"{"email":"a@b.co","first_name":"A","last_name":"B","password":"x","role":"host"}"#;
        assert!(serde_json::from_str::<CreateUserRequest>(json).is_err());
    }

    #[test]
    fn test_create_user_request_is_owner_flag() {
        let json = r#"{"email":"a@b.co","first_name":"A","last_name":"B","password":"x","is_owner":false}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        let user = request.into_user("hashed".to_string()).unwrap();
        assert!(!user.is_owner);

        let json = r#"{"email":"a@b.co","first_name":"A","last_name":"B","password":"x","is_owner":true}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.into_user("hashed".to_string()).unwrap_err(),
            UserError::OwnerFlagNotSettable
        );
    }

    #[test]
    fn test_update_user_rejects_password() {
        let mut user = test_user();
        let json = r#"{"password":"new-secret"}"#;
        let request: UpdateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.apply_to(&mut user),
            Err(UserError::PasswordChangeNotAllowed)
        );
    }

    #[test]
    fn test_update_user_rejects_unknown_attribute() {
        let json = r#"{"is_admin":true}"#;
        assert!(serde_json::from_str::<UpdateUserRequest>(json).is_err());
    }

    #[test]
    fn test_update_user_is_atomic() {
        let mut user = test_user();
        let request = UpdateUserRequest::new()
            .with_first_name("Janet")
            .with_email("broken");
        assert!(request.apply_to(&mut user).is_err());
        assert_eq!(user.first_name, "Jane");
    }

    #[test]
    fn test_create_place_request_into_place() {
        let amenity = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let place = CreatePlaceRequest::new("Loft", 120.0, 48.85, 2.35)
            .with_description("Near the river")
            .with_amenities(vec![amenity, amenity])
            .into_place(owner)
            .unwrap();
        assert_eq!(place.owner_id, owner);
        assert_eq!(place.amenities, vec![amenity]);
        assert_eq!(place.description.as_deref(), Some("Near the river"));
    }

    #[test]
    fn test_create_place_request_blank_description() {
        let json = r#"{"title":"Loft","description":"","price":10,"latitude":0,"longitude":0}"#;
        let request: CreatePlaceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_update_place_rejects_unknown_attribute() {
        let json = r#"{"reviews":[]}"#;
        assert!(serde_json::from_str::<UpdatePlaceRequest>(json).is_err());
    }

    #[test]
    fn test_update_place_apply() {
        let mut place = Place::new("Loft", 100.0, 0.0, 0.0, Uuid::new_v4()).unwrap();
        UpdatePlaceRequest::new()
            .with_title("Big Loft")
            .with_price(150.0)
            .apply_to(&mut place)
            .unwrap();
        assert_eq!(place.title, "Big Loft");
        assert_eq!(place.price, 150.0);

        let err = UpdatePlaceRequest::new()
            .with_price(-1.0)
            .apply_to(&mut place)
            .unwrap_err();
        assert_eq!(err, PlaceError::InvalidPrice(-1.0));
        assert_eq!(place.price, 150.0);
    }

    #[test]
    fn test_update_review_rating_out_of_range() {
        let mut review = Review::new("Nice", 3, Uuid::new_v4(), Uuid::new_v4()).unwrap();
        let err = UpdateReviewRequest::new()
            .with_text("Changed")
            .with_rating(9)
            .apply_to(&mut review)
            .unwrap_err();
        assert_eq!(err, ReviewError::InvalidRating(9));
        assert_eq!(review.text, "Nice");
    }

    #[test]
    fn test_create_amenity_request() {
        let amenity = CreateAmenityRequest::new("Pool")
            .with_description("Heated")
            .into_amenity()
            .unwrap();
        assert_eq!(amenity.name, "Pool");
        assert_eq!(amenity.description.as_deref(), Some("Heated"));
    }
}
