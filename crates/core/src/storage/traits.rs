use async_trait::async_trait;
use uuid::Uuid;

use crate::listing::{Amenity, Place, Review, User};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Gets a user by their email address.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Lists every user.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Creates a new user. Fails with `AlreadyExists` on a duplicate id or email.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Updates an existing user's profile and role.
    ///
    /// `is_owner`, `owned_places` and `rented_places` are left as stored; they
    /// only change through the methods below.
    async fn update_user(&self, user: &User) -> Result<()>;

    /// Marks the user as an owner and records `place_id` in `owned_places`,
    /// as one step. Returns the stored user afterwards.
    async fn add_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User>;

    /// Drops `place_id` from the user's `owned_places`, as one step.
    async fn remove_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<()>;

    /// Records `place_id` in `rented_places`, as one step. Returns the stored
    /// user afterwards.
    async fn add_rented_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User>;

    /// Deletes a user by their ID.
    async fn delete_user(&self, id: Uuid) -> Result<()>;
}

/// Repository for place operations.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Gets a place by its ID.
    async fn get_place(&self, id: Uuid) -> Result<Option<Place>>;

    /// Lists every place.
    async fn list_places(&self) -> Result<Vec<Place>>;

    /// Lists the places owned by a user.
    async fn list_places_by_owner(&self, owner_id: Uuid) -> Result<Vec<Place>>;

    /// Creates a new place.
    async fn create_place(&self, place: &Place) -> Result<()>;

    /// Updates an existing place. The stored `reviews` list is kept.
    async fn update_place(&self, place: &Place) -> Result<()>;

    /// Appends `review_id` to the place's `reviews`, as one step.
    async fn add_review(&self, place_id: Uuid, review_id: Uuid) -> Result<()>;

    /// Drops `review_id` from the place's `reviews`, as one step.
    async fn remove_review(&self, place_id: Uuid, review_id: Uuid) -> Result<()>;

    /// Deletes a place by its ID.
    async fn delete_place(&self, id: Uuid) -> Result<()>;
}

/// Repository for review operations.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Gets a review by its ID.
    async fn get_review(&self, id: Uuid) -> Result<Option<Review>>;

    /// Lists every review.
    async fn list_reviews(&self) -> Result<Vec<Review>>;

    /// Lists the reviews written for a place.
    async fn list_reviews_by_place(&self, place_id: Uuid) -> Result<Vec<Review>>;

    /// Gets the review a user wrote for a place, if any.
    async fn get_review_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>>;

    /// Creates a new review.
    async fn create_review(&self, review: &Review) -> Result<()>;

    /// Updates an existing review.
    async fn update_review(&self, review: &Review) -> Result<()>;

    /// Deletes a review by its ID.
    async fn delete_review(&self, id: Uuid) -> Result<()>;
}

/// Repository for amenity operations.
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    /// Gets an amenity by its ID.
    async fn get_amenity(&self, id: Uuid) -> Result<Option<Amenity>>;

    /// Gets an amenity by its exact name.
    async fn get_amenity_by_name(&self, name: &str) -> Result<Option<Amenity>>;

    /// Lists every amenity.
    async fn list_amenities(&self) -> Result<Vec<Amenity>>;

    /// Creates a new amenity.
    async fn create_amenity(&self, amenity: &Amenity) -> Result<()>;

    /// Updates an existing amenity.
    async fn update_amenity(&self, amenity: &Amenity) -> Result<()>;

    /// Deletes an amenity by its ID.
    async fn delete_amenity(&self, id: Uuid) -> Result<()>;
}
