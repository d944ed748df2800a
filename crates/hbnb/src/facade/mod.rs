//! Orchestration between the HTTP handlers and the repositories.
//!
//! `HbnbFacade` owns one trait object per repository. Every operation that
//! changes data takes the [`Actor`] performing it, so ownership rules are
//! decided here and not in the handlers.

mod error;

pub use error::{service_error_to_status_code, ServiceError};

use std::sync::Arc;

use uuid::Uuid;

use hbnb_auth::hash_password;
use hbnb_core::auth::{can_modify, Actor};
use hbnb_core::listing::{
    validate_email, validate_password, Amenity, CreateAmenityRequest, CreatePlaceRequest,
    CreateReviewRequest, CreateUserRequest, Place, Review, UpdateAmenityRequest,
    UpdatePlaceRequest, UpdateReviewRequest, UpdateUserRequest, User,
};
use hbnb_core::storage::{
    AmenityRepository, PlaceRepository, RepositoryError, ReviewRepository, UserRepository,
};

pub type Result<T> = std::result::Result<T, ServiceError>;

pub struct HbnbFacade {
    users: Arc<dyn UserRepository>,
    places: Arc<dyn PlaceRepository>,
    reviews: Arc<dyn ReviewRepository>,
    amenities: Arc<dyn AmenityRepository>,
}

impl HbnbFacade {
    pub fn new(
        users: Arc<dyn UserRepository>,
        places: Arc<dyn PlaceRepository>,
        reviews: Arc<dyn ReviewRepository>,
        amenities: Arc<dyn AmenityRepository>,
    ) -> Self {
        Self {
            users,
            places,
            reviews,
            amenities,
        }
    }

    /// Builds a facade where a single backend serves every repository.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: UserRepository + PlaceRepository + ReviewRepository + AmenityRepository + 'static,
    {
        Self::new(repo.clone(), repo.clone(), repo.clone(), repo)
    }

    /// The user repository, shared with the auth layer.
    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Registers a user. Only an administrator may create another administrator.
    pub async fn create_user(
        &self,
        caller: Option<&Actor>,
        request: CreateUserRequest,
    ) -> Result<User> {
        if request.is_admin && !caller.is_some_and(|actor| actor.is_admin) {
            return Err(ServiceError::Forbidden(
                "Admin privileges required".to_string(),
            ));
        }

        validate_password(&request.password)?;
        let email = validate_email(&request.email)?;
        if self.users.get_user_by_email(&email).await?.is_some() {
            return Err(ServiceError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = request.into_user(password_hash)?;
        self.users.create_user(&user).await?;

        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "Created user");
        Ok(user)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User> {
        self.users
            .get_user(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.get_user_by_email(email.trim()).await?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.list_users().await?)
    }

    /// Updates a profile. Users edit themselves; only administrators edit
    /// others or change an email address.
    pub async fn update_user(
        &self,
        actor: &Actor,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<User> {
        let mut user = self.get_user(id).await?;
        if !can_modify(actor, user.id) {
            return Err(ServiceError::forbidden());
        }

        if let Some(email) = &request.email {
            if !actor.is_admin {
                return Err(ServiceError::Forbidden(
                    "Only administrators can change an email address".to_string(),
                ));
            }
            let email = validate_email(email)?;
            if let Some(existing) = self.users.get_user_by_email(&email).await? {
                if existing.id != user.id {
                    return Err(ServiceError::Conflict("Email already registered".to_string()));
                }
            }
        }

        request.apply_to(&mut user)?;
        self.users.update_user(&user).await?;

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    // ========================================================================
    // Places
    // ========================================================================

    /// Lists a new place. The owner is the actor unless an administrator
    /// names someone else; the owner is flagged as such and the place id is
    /// appended to their `owned_places`.
    pub async fn create_place(&self, actor: &Actor, request: CreatePlaceRequest) -> Result<Place> {
        let owner_id = request.owner_id.unwrap_or(actor.user_id);
        if !can_modify(actor, owner_id) {
            return Err(ServiceError::forbidden());
        }

        if self.users.get_user(owner_id).await?.is_none() {
            return Err(ServiceError::InvalidReference("Owner not found".to_string()));
        }

        for amenity_id in &request.amenities {
            if self.amenities.get_amenity(*amenity_id).await?.is_none() {
                return Err(ServiceError::InvalidReference(format!(
                    "Amenity with ID '{amenity_id}' not found"
                )));
            }
        }

        let place = request.into_place(owner_id)?;
        self.places.create_place(&place).await?;
        self.users.add_owned_place(owner_id, place.id).await?;

        tracing::info!(place_id = %place.id, owner_id = %owner_id, "Created place");
        Ok(place)
    }

    pub async fn get_place(&self, id: Uuid) -> Result<Place> {
        self.places
            .get_place(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Place"))
    }

    pub async fn list_places(&self) -> Result<Vec<Place>> {
        Ok(self.places.list_places().await?)
    }

    /// Places owned by a user. The user must exist.
    pub async fn list_places_by_owner(&self, owner_id: Uuid) -> Result<Vec<Place>> {
        self.get_user(owner_id).await?;
        Ok(self.places.list_places_by_owner(owner_id).await?)
    }

    /// Updates a listing. Only the owner or an administrator may do so, and
    /// only an administrator may hand the place to another owner.
    pub async fn update_place(
        &self,
        actor: &Actor,
        id: Uuid,
        request: UpdatePlaceRequest,
    ) -> Result<Place> {
        let mut place = self.get_place(id).await?;
        if !can_modify(actor, place.owner_id) {
            return Err(ServiceError::forbidden());
        }

        let previous_owner_id = place.owner_id;
        let new_owner_id = match request.owner_id {
            Some(owner_id) if owner_id != previous_owner_id => {
                if !actor.is_admin {
                    return Err(ServiceError::Forbidden(
                        "Only administrators can transfer a place".to_string(),
                    ));
                }
                if self.users.get_user(owner_id).await?.is_none() {
                    return Err(ServiceError::InvalidReference("Owner not found".to_string()));
                }
                Some(owner_id)
            }
            _ => None,
        };

        request.apply_to(&mut place)?;
        self.places.update_place(&place).await?;

        if let Some(new_owner_id) = new_owner_id {
            self.users.add_owned_place(new_owner_id, place.id).await?;
            match self.users.remove_owned_place(previous_owner_id, place.id).await {
                Ok(()) | Err(RepositoryError::NotFound { .. }) => {}
                Err(e) => return Err(e.into()),
            }
            tracing::info!(
                place_id = %place.id,
                from = %previous_owner_id,
                to = %new_owner_id,
                "Transferred place"
            );
        }

        tracing::info!(place_id = %place.id, "Updated place");
        Ok(place)
    }

    /// Records a rental of `id` by the actor. Owners cannot rent their own place.
    pub async fn rent_place(&self, actor: &Actor, id: Uuid) -> Result<User> {
        let place = self.get_place(id).await?;
        if place.owner_id == actor.user_id {
            return Err(ServiceError::Forbidden(
                "You cannot rent your own place".to_string(),
            ));
        }

        self.get_user(actor.user_id).await?;
        let user = self.users.add_rented_place(actor.user_id, place.id).await?;

        tracing::info!(place_id = %place.id, user_id = %user.id, "Rented place");
        Ok(user)
    }

    // ========================================================================
    // Reviews
    // ========================================================================

    /// Posts a review authored by the actor.
    pub async fn create_review(
        &self,
        actor: &Actor,
        request: CreateReviewRequest,
    ) -> Result<Review> {
        let place = self.get_place(request.place_id).await?;
        if place.owner_id == actor.user_id {
            return Err(ServiceError::Forbidden(
                "You cannot review your own place".to_string(),
            ));
        }
        if self
            .reviews
            .get_review_by_user_and_place(actor.user_id, place.id)
            .await?
            .is_some()
        {
            return Err(ServiceError::Forbidden(
                "You have already reviewed this place".to_string(),
            ));
        }

        let review = request.into_review(actor.user_id)?;
        self.reviews.create_review(&review).await?;

        self.places.add_review(place.id, review.id).await?;

        tracing::info!(review_id = %review.id, place_id = %place.id, "Created review");
        Ok(review)
    }

    pub async fn get_review(&self, id: Uuid) -> Result<Review> {
        self.reviews
            .get_review(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review"))
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        Ok(self.reviews.list_reviews().await?)
    }

    pub async fn list_reviews_by_place(&self, place_id: Uuid) -> Result<Vec<Review>> {
        self.get_place(place_id).await?;
        Ok(self.reviews.list_reviews_by_place(place_id).await?)
    }

    pub async fn update_review(
        &self,
        actor: &Actor,
        id: Uuid,
        request: UpdateReviewRequest,
    ) -> Result<Review> {
        let mut review = self.get_review(id).await?;
        if !can_modify(actor, review.user_id) {
            return Err(ServiceError::forbidden());
        }

        request.apply_to(&mut review)?;
        self.reviews.update_review(&review).await?;

        tracing::info!(review_id = %review.id, "Updated review");
        Ok(review)
    }

    /// Deletes a review and drops its id from the place's `reviews`.
    pub async fn delete_review(&self, actor: &Actor, id: Uuid) -> Result<()> {
        let review = self.get_review(id).await?;
        if !can_modify(actor, review.user_id) {
            return Err(ServiceError::forbidden());
        }

        self.reviews.delete_review(id).await?;

        match self.places.remove_review(review.place_id, id).await {
            Ok(()) | Err(RepositoryError::NotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }

        tracing::info!(review_id = %id, "Deleted review");
        Ok(())
    }

    // ========================================================================
    // Amenities
    // ========================================================================

    pub async fn create_amenity(&self, request: CreateAmenityRequest) -> Result<Amenity> {
        let amenity = request.into_amenity()?;
        if self
            .amenities
            .get_amenity_by_name(&amenity.name)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict("Amenity already exists".to_string()));
        }

        self.amenities.create_amenity(&amenity).await?;

        tracing::info!(amenity_id = %amenity.id, name = %amenity.name, "Created amenity");
        Ok(amenity)
    }

    pub async fn get_amenity(&self, id: Uuid) -> Result<Amenity> {
        self.amenities
            .get_amenity(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Amenity"))
    }

    pub async fn list_amenities(&self) -> Result<Vec<Amenity>> {
        Ok(self.amenities.list_amenities().await?)
    }

    pub async fn update_amenity(&self, id: Uuid, request: UpdateAmenityRequest) -> Result<Amenity> {
        let mut amenity = self.get_amenity(id).await?;
        request.apply_to(&mut amenity)?;

        if let Some(existing) = self.amenities.get_amenity_by_name(&amenity.name).await? {
            if existing.id != amenity.id {
                return Err(ServiceError::Conflict("Amenity already exists".to_string()));
            }
        }

        self.amenities.update_amenity(&amenity).await?;

        tracing::info!(amenity_id = %amenity.id, "Updated amenity");
        Ok(amenity)
    }

    /// Places keep listing a deleted amenity's id; there is no cascade.
    pub async fn delete_amenity(&self, id: Uuid) -> Result<()> {
        self.get_amenity(id).await?;
        self.amenities.delete_amenity(id).await?;

        tracing::info!(amenity_id = %id, "Deleted amenity");
        Ok(())
    }
}
