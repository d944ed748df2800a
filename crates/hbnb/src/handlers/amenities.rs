//! Amenity handlers. Reads are public; writes need a token.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use hbnb_auth::CurrentUser;
use hbnb_core::listing::{Amenity, CreateAmenityRequest, MessageResponse, UpdateAmenityRequest};

use crate::{
    handlers::{path::resource_id, AppError},
    state::AppState,
};

/// Create an amenity (POST /api/v1/amenities/).
pub async fn create_amenity(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateAmenityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Amenity>), AppError> {
    let Json(request) = payload?;

    let amenity = state.facade.create_amenity(request).await?;
    tracing::debug!(user_id = %user.id, amenity_id = %amenity.id, "Amenity created by user");
    Ok((StatusCode::CREATED, Json(amenity)))
}

/// List all amenities (GET /api/v1/amenities/).
pub async fn list_amenities(
    State(state): State<AppState>,
) -> Result<Json<Vec<Amenity>>, AppError> {
    Ok(Json(state.facade.list_amenities().await?))
}

/// Get a single amenity by ID (GET /api/v1/amenities/{id}).
pub async fn get_amenity(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Amenity>, AppError> {
    let id = resource_id(id, "Amenity")?;
    Ok(Json(state.facade.get_amenity(id).await?))
}

/// Update an amenity (PUT /api/v1/amenities/{id}).
pub async fn update_amenity(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateAmenityRequest>, JsonRejection>,
) -> Result<Json<Amenity>, AppError> {
    let id = resource_id(id, "Amenity")?;
    let Json(request) = payload?;
    Ok(Json(state.facade.update_amenity(id, request).await?))
}

/// Delete an amenity (DELETE /api/v1/amenities/{id}).
pub async fn delete_amenity(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = resource_id(id, "Amenity")?;
    state.facade.delete_amenity(id).await?;
    Ok(Json(MessageResponse::new("Amenity deleted successfully")))
}
