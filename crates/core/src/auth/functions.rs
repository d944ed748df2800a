use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::{Actor, AuthError, Claims};
use crate::listing::User;

/// Calculate token expiry from issue time and TTL.
///
/// `None` when the expiry falls outside the representable date range.
pub fn calculate_expiry(issued_at: DateTime<Utc>, ttl: Duration) -> Option<DateTime<Utc>> {
    issued_at.checked_add_signed(ttl)
}

/// Build the claims for an access token issued to `user` at `now`.
pub fn build_claims(user: &User, now: DateTime<Utc>, ttl: Duration) -> Result<Claims, AuthError> {
    let expires_at = calculate_expiry(now, ttl).ok_or(AuthError::TokenLifetime)?;
    Ok(Claims {
        sub: user.id,
        is_admin: user.is_admin,
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    })
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Whether `actor` may modify a resource owned or authored by `owner_id`.
pub fn can_modify(actor: &Actor, owner_id: Uuid) -> bool {
    actor.is_admin || actor.user_id == owner_id
}
