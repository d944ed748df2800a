//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use hbnb_core::listing::{Amenity, Place, Review, User};
use hbnb_core::storage::{
    AmenityRepository, PlaceRepository, RepositoryError, Result, ReviewRepository,
    UserRepository,
};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
/// Uniqueness rules mirror the SQLite schema: one account per email, one
/// amenity per name, one review per user and place.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    places: Arc<RwLock<HashMap<Uuid, Place>>>,
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
    amenities: Arc<RwLock<HashMap<Uuid, Amenity>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            places: Arc::new(RwLock::new(HashMap::new())),
            reviews: Arc::new(RwLock::new(HashMap::new())),
            amenities: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

/// Listing order is creation order, with the id as a tie-breaker.
fn sorted_by_creation<T>(
    values: impl Iterator<Item = T>,
    key: impl Fn(&T) -> (DateTime<Utc>, Uuid),
) -> Vec<T> {
    let mut values: Vec<T> = values.collect();
    values.sort_by_key(key);
    values
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(sorted_by_creation(users.values().cloned(), |u| {
            (u.created_at, u.id)
        }))
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(RepositoryError::already_exists("User", user.id));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(RepositoryError::already_exists("User", &user.email));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(RepositoryError::already_exists("User", &user.email));
        }
        let stored = users
            .get_mut(&user.id)
            .ok_or_else(|| RepositoryError::not_found("User", user.id))?;
        *stored = User {
            is_owner: stored.is_owner,
            owned_places: std::mem::take(&mut stored.owned_places),
            rented_places: std::mem::take(&mut stored.rented_places),
            ..user.clone()
        };
        Ok(())
    }

    async fn add_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| RepositoryError::not_found("User", user_id))?;
        user.become_owner();
        user.add_owned_place(place_id)
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        Ok(user.clone())
    }

    async fn remove_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| RepositoryError::not_found("User", user_id))?;
        user.remove_owned_place(place_id);
        Ok(())
    }

    async fn add_rented_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| RepositoryError::not_found("User", user_id))?;
        user.rent_place(place_id);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.write().await;
        if users.remove(&id).is_none() {
            return Err(RepositoryError::not_found("User", id));
        }
        Ok(())
    }
}

#[async_trait]
impl PlaceRepository for InMemoryRepository {
    async fn get_place(&self, id: Uuid) -> Result<Option<Place>> {
        let places = self.places.read().await;
        Ok(places.get(&id).cloned())
    }

    async fn list_places(&self) -> Result<Vec<Place>> {
        let places = self.places.read().await;
        Ok(sorted_by_creation(places.values().cloned(), |p| {
            (p.created_at, p.id)
        }))
    }

    async fn list_places_by_owner(&self, owner_id: Uuid) -> Result<Vec<Place>> {
        let places = self.places.read().await;
        Ok(sorted_by_creation(
            places.values().filter(|p| p.owner_id == owner_id).cloned(),
            |p| (p.created_at, p.id),
        ))
    }

    async fn create_place(&self, place: &Place) -> Result<()> {
        let mut places = self.places.write().await;
        if places.contains_key(&place.id) {
            return Err(RepositoryError::already_exists("Place", place.id));
        }
        places.insert(place.id, place.clone());
        Ok(())
    }

    async fn update_place(&self, place: &Place) -> Result<()> {
        let mut places = self.places.write().await;
        let stored = places
            .get_mut(&place.id)
            .ok_or_else(|| RepositoryError::not_found("Place", place.id))?;
        *stored = Place {
            reviews: std::mem::take(&mut stored.reviews),
            ..place.clone()
        };
        Ok(())
    }

    async fn add_review(&self, place_id: Uuid, review_id: Uuid) -> Result<()> {
        let mut places = self.places.write().await;
        places
            .get_mut(&place_id)
            .ok_or_else(|| RepositoryError::not_found("Place", place_id))?
            .add_review(review_id);
        Ok(())
    }

    async fn remove_review(&self, place_id: Uuid, review_id: Uuid) -> Result<()> {
        let mut places = self.places.write().await;
        places
            .get_mut(&place_id)
            .ok_or_else(|| RepositoryError::not_found("Place", place_id))?
            .remove_review(review_id);
        Ok(())
    }

    async fn delete_place(&self, id: Uuid) -> Result<()> {
        let mut places = self.places.write().await;
        if places.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Place", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn get_review(&self, id: Uuid) -> Result<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(sorted_by_creation(reviews.values().cloned(), |r| {
            (r.created_at, r.id)
        }))
    }

    async fn list_reviews_by_place(&self, place_id: Uuid) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        Ok(sorted_by_creation(
            reviews.values().filter(|r| r.place_id == place_id).cloned(),
            |r| (r.created_at, r.id),
        ))
    }

    async fn get_review_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .find(|r| r.user_id == user_id && r.place_id == place_id)
            .cloned())
    }

    async fn create_review(&self, review: &Review) -> Result<()> {
        let mut reviews = self.reviews.write().await;
        if reviews.contains_key(&review.id) {
            return Err(RepositoryError::already_exists("Review", review.id));
        }
        if reviews
            .values()
            .any(|r| r.user_id == review.user_id && r.place_id == review.place_id)
        {
            return Err(RepositoryError::already_exists(
                "Review",
                format!("{}/{}", review.user_id, review.place_id),
            ));
        }
        reviews.insert(review.id, review.clone());
        Ok(())
    }

    async fn update_review(&self, review: &Review) -> Result<()> {
        let mut reviews = self.reviews.write().await;
        if !reviews.contains_key(&review.id) {
            return Err(RepositoryError::not_found("Review", review.id));
        }
        reviews.insert(review.id, review.clone());
        Ok(())
    }

    async fn delete_review(&self, id: Uuid) -> Result<()> {
        let mut reviews = self.reviews.write().await;
        if reviews.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Review", id));
        }
        Ok(())
    }
}

#[async_trait]
impl AmenityRepository for InMemoryRepository {
    async fn get_amenity(&self, id: Uuid) -> Result<Option<Amenity>> {
        let amenities = self.amenities.read().await;
        Ok(amenities.get(&id).cloned())
    }

    async fn get_amenity_by_name(&self, name: &str) -> Result<Option<Amenity>> {
        let amenities = self.amenities.read().await;
        Ok(amenities.values().find(|a| a.name == name).cloned())
    }

    async fn list_amenities(&self) -> Result<Vec<Amenity>> {
        let amenities = self.amenities.read().await;
        Ok(sorted_by_creation(amenities.values().cloned(), |a| {
            (a.created_at, a.id)
        }))
    }

    async fn create_amenity(&self, amenity: &Amenity) -> Result<()> {
        let mut amenities = self.amenities.write().await;
        if amenities.contains_key(&amenity.id) {
            return Err(RepositoryError::already_exists("Amenity", amenity.id));
        }
        if amenities.values().any(|a| a.name == amenity.name) {
            return Err(RepositoryError::already_exists("Amenity", &amenity.name));
        }
        amenities.insert(amenity.id, amenity.clone());
        Ok(())
    }

    async fn update_amenity(&self, amenity: &Amenity) -> Result<()> {
        let mut amenities = self.amenities.write().await;
        if !amenities.contains_key(&amenity.id) {
            return Err(RepositoryError::not_found("Amenity", amenity.id));
        }
        if amenities
            .values()
            .any(|a| a.id != amenity.id && a.name == amenity.name)
        {
            return Err(RepositoryError::already_exists("Amenity", &amenity.name));
        }
        amenities.insert(amenity.id, amenity.clone());
        Ok(())
    }

    async fn delete_amenity(&self, id: Uuid) -> Result<()> {
        let mut amenities = self.amenities.write().await;
        if amenities.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Amenity", id));
        }
        Ok(())
    }
}
