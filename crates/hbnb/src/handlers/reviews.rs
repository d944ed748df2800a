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
use hbnb_core::listing::{CreateReviewRequest, MessageResponse, Review, UpdateReviewRequest};

use crate::{
    handlers::{path::resource_id, AppError},
    state::AppState,
};

/// Post a review as the caller (POST /api/v1/reviews/).
pub async fn create_review(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let Json(request) = payload?;

    let review = state
        .facade
        .create_review(&Actor::from(&user), request)
        .await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// List all reviews (GET /api/v1/reviews/).
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, AppError> {
    Ok(Json(state.facade.list_reviews().await?))
}

/// Get a single review by ID (GET /api/v1/reviews/{id}).
pub async fn get_review(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Review>, AppError> {
    let id = resource_id(id, "Review")?;
    Ok(Json(state.facade.get_review(id).await?))
}

/// Update a review (PUT /api/v1/reviews/{id}).
pub async fn update_review(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateReviewRequest>, JsonRejection>,
) -> Result<Json<Review>, AppError> {
    let id = resource_id(id, "Review")?;
    let Json(request) = payload?;

    let review = state
        .facade
        .update_review(&Actor::from(&user), id, request)
        .await?;
    Ok(Json(review))
}

/// Delete a review (DELETE /api/v1/reviews/{id}).
pub async fn delete_review(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = resource_id(id, "Review")?;
    state
        .facade
        .delete_review(&Actor::from(&user), id)
        .await?;
    Ok(Json(MessageResponse::new("Review deleted successfully")))
}
