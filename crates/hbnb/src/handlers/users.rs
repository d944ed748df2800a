//! User handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use hbnb_auth::{CurrentUser, OptionalUser};
use hbnb_core::auth::Actor;
use hbnb_core::listing::{CreateUserRequest, Place, UpdateUserRequest, User};

use crate::{
    handlers::{path::resource_id, AppError},
    state::AppState,
};

/// Register a user (POST /api/v1/users/).
///
/// Anyone may register. Creating an administrator needs an admin token.
pub async fn create_user(
    OptionalUser(caller): OptionalUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(request) = payload?;
    let caller = caller.as_ref().map(Actor::from);

    let user = state.facade.create_user(caller.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List all users (GET /api/v1/users/).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.facade.list_users().await?))
}

/// Get a single user by ID (GET /api/v1/users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<User>, AppError> {
    let id = resource_id(id, "User")?;
    Ok(Json(state.facade.get_user(id).await?))
}

/// Update a profile (PUT /api/v1/users/{id}).
pub async fn update_user(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let id = resource_id(id, "User")?;
    let Json(request) = payload?;

    let updated = state
        .facade
        .update_user(&Actor::from(&user), id, request)
        .await?;
    Ok(Json(updated))
}

/// Places owned by a user (GET /api/v1/users/{id}/places).
pub async fn list_user_places(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Place>>, AppError> {
    let id = resource_id(id, "User")?;
    Ok(Json(state.facade.list_places_by_owner(id).await?))
}
