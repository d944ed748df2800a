//! Place handlers, including rentals and the per-place review listing.

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
use hbnb_core::auth::Actor;
use hbnb_core::listing::{CreatePlaceRequest, Place, Review, UpdatePlaceRequest, User};

use crate::{
    handlers::{path::resource_id, AppError},
    state::AppState,
};

/// Create a listing owned by the caller (POST /api/v1/places/).
pub async fn create_place(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CreatePlaceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Place>), AppError> {
    let Json(request) = payload?;

    let place = state
        .facade
        .create_place(&Actor::from(&user), request)
        .await?;
    Ok((StatusCode::CREATED, Json(place)))
}

/// List all places (GET /api/v1/places/).
pub async fn list_places(State(state): State<AppState>) -> Result<Json<Vec<Place>>, AppError> {
    Ok(Json(state.facade.list_places().await?))
}

/// Get a single place by ID (GET /api/v1/places/{id}).
pub async fn get_place(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Place>, AppError> {
    let id = resource_id(id, "Place")?;
    Ok(Json(state.facade.get_place(id).await?))
}

/// Update a place (PUT /api/v1/places/{id}).
pub async fn update_place(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdatePlaceRequest>, JsonRejection>,
) -> Result<Json<Place>, AppError> {
    let id = resource_id(id, "Place")?;
    let Json(request) = payload?;

    let place = state
        .facade
        .update_place(&Actor::from(&user), id, request)
        .await?;
    Ok(Json(place))
}

/// Rent a place (POST /api/v1/places/{id}/rent). Returns the renter.
pub async fn rent_place(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<User>, AppError> {
    let id = resource_id(id, "Place")?;
    let renter = state.facade.rent_place(&Actor::from(&user), id).await?;
    Ok(Json(renter))
}

/// Reviews of a place (GET /api/v1/places/{id}/reviews).
pub async fn list_place_reviews(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Review>>, AppError> {
    let id = resource_id(id, "Place")?;
    Ok(Json(state.facade.list_reviews_by_place(id).await?))
}
