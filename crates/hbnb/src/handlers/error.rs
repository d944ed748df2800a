use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hbnb_core::storage::RepositoryError;

use crate::facade::{service_error_to_status_code, ServiceError};

/// Handler error that wraps `anyhow::Error`.
///
/// The status code is picked by downcasting to the errors the API knows
/// about; anything else is a 500. Bodies are `{ "error": "<message>" }`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(err) = self.0.downcast_ref::<ServiceError>() {
            service_error_to_status_code(err)
        } else if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            err.status_code()
        } else if self.0.downcast_ref::<JsonRejection>().is_some() {
            400
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn message(&self) -> String {
        match self.0.downcast_ref::<JsonRejection>() {
            Some(rejection) => rejection.body_text(),
            None => self.0.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
            "Internal server error".to_string()
        } else {
            let message = self.message();
            tracing::warn!(status = %status, message = %message, "Request rejected");
            message
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
