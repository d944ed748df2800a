//! HS256 access tokens.

use chrono::Utc;
use hbnb_core::auth::{build_claims, AuthError, Claims};
use hbnb_core::listing::User;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::config::AuthConfig;

/// Issues an access token for `user`, valid for the configured TTL.
pub fn issue_token(config: &AuthConfig, user: &User) -> Result<String, AuthError> {
    let ttl = config.token_ttl_chrono().ok_or(AuthError::TokenLifetime)?;
    let claims = build_claims(user, Utc::now(), ttl)?;
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Verifies the signature and expiry of an access token and returns its claims.
pub fn verify_token(config: &AuthConfig, token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken(e.to_string()),
    })
}
