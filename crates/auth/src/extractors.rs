//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;
use hbnb_core::auth::{parse_bearer_token, AuthError as CoreError};
use hbnb_core::listing::User;

use crate::error::AuthError;
use crate::tokens::verify_token;
use crate::AuthState;

/// Extractor for authenticated user. Returns 401 if not authenticated.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let token = extract_token(parts, &auth_state.config.cookie_name)
            .ok_or(CoreError::MissingToken)?;

        authenticate(&auth_state, &token).await.map(CurrentUser)
    }
}

/// Extractor for optionally authenticated user. Returns None if not authenticated.
pub struct OptionalUser(pub Option<User>);

impl<S> FromRequestParts<S> for OptionalUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let Some(token) = extract_token(parts, &auth_state.config.cookie_name) else {
            return Ok(OptionalUser(None));
        };

        match authenticate(&auth_state, &token).await {
            Ok(user) => Ok(OptionalUser(Some(user))),
            Err(AuthError::Core(err)) => {
                tracing::debug!(error = %err, "Ignoring unusable token on optional auth");
                Ok(OptionalUser(None))
            }
            Err(err) => Err(err),
        }
    }
}

/// Reads the token from the Authorization header (API clients) and falls
/// back to the auth cookie (browsers).
fn extract_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let from_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .map(str::to_string);

    from_header.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get(cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Verifies the token and loads the user it names. A token for a deleted
/// user is rejected.
async fn authenticate(auth_state: &AuthState, token: &str) -> Result<User, AuthError> {
    let claims = verify_token(&auth_state.config, token)?;

    auth_state
        .users
        .get_user(claims.sub)
        .await?
        .ok_or_else(|| CoreError::UserNotFound.into())
}
