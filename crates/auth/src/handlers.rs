//! HTTP handlers for auth routes.

use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use hbnb_core::auth::AuthError as CoreError;
use hbnb_core::listing::{LoginRequest, MessageResponse, TokenResponse, User};

use crate::error::AuthError;
use crate::extractors::CurrentUser;
use crate::password::verify_password;
use crate::tokens::issue_token;
use crate::AuthState;

/// Creates the auth router. Mount it under the API prefix.
///
/// Routes:
/// - `POST /login` - Exchange email and password for an access token
/// - `POST /logout` - Clear the auth cookie
/// - `GET /protected` - Greet the authenticated user
pub fn auth_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    AuthState: FromRef<S>,
{
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/protected", get(protected))
}

/// Checks an email and password pair against the user repository.
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub async fn authenticate_user(
    state: &AuthState,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = state
        .users
        .get_user_by_email(email.trim())
        .await?
        .ok_or(CoreError::InvalidCredentials)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(CoreError::InvalidCredentials.into());
    }

    Ok(user)
}

/// The token is returned in the body for API clients and also set as a
/// cookie for browsers.
async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<TokenResponse>), AuthError> {
    let Json(credentials) = payload.map_err(|e| AuthError::InvalidPayload(e.body_text()))?;

    let user = authenticate_user(&state, &credentials.email, &credentials.password).await?;

    let access_token = issue_token(&state.config, &user)?;
    tracing::info!(user_id = %user.id, "User logged in");

    let cookie = Cookie::build((state.config.cookie_name.clone(), access_token.clone()))
        .path("/")
        .http_only(true)
        .secure(state.config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(
            i64::try_from(state.config.token_ttl.as_secs()).unwrap_or(i64::MAX),
        ))
        .build();

    Ok((jar.add(cookie), Json(TokenResponse { access_token })))
}

async fn logout(State(state): State<AuthState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::build(state.config.cookie_name.clone()).path("/"));
    (jar, StatusCode::NO_CONTENT)
}

async fn protected(CurrentUser(user): CurrentUser) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Welcome, {}!",
        user.full_name()
    )))
}
