use axum::extract::{rejection::PathRejection, Path};
use uuid::Uuid;

use crate::{facade::ServiceError, handlers::AppError};

/// Unwraps the `{id}` segment of a resource route.
///
/// A segment that is not a UUID cannot name a stored `entity`, so it gets the
/// same 404 as an unknown id instead of axum's plain-text rejection.
pub fn resource_id(
    path: Result<Path<Uuid>, PathRejection>,
    entity: &str,
) -> Result<Uuid, AppError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(PathRejection::FailedToDeserializePathParams(rejection)) => {
            tracing::debug!(entity, reason = %rejection.body_text(), "Unparseable resource id");
            Err(ServiceError::not_found(entity).into())
        }
        Err(rejection) => Err(rejection.into()),
    }
}
