use std::time::Duration;

use crate::error::AuthError;

/// Default token lifetime in minutes.
pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 60;

/// Longest accepted token lifetime: one year.
pub const MAX_TOKEN_TTL_MINUTES: u64 = 60 * 24 * 365;

/// Complete auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign access tokens.
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Creates a config with default TTL and cookie settings.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_MINUTES * 60),
            cookie_name: "token".to_string(),
            cookie_secure: true,
        }
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET_KEY`: Token signing secret
    /// - `SECRET_KEY`: Fallback signing secret when `JWT_SECRET_KEY` is unset
    /// - `JWT_EXPIRES_MINUTES`: Token TTL in minutes, 1 to 525600 (default: 60)
    /// - `COOKIE_SECURE`: Whether to set secure flag on cookies (default: true)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if neither secret is set or the TTL is not
    /// a whole number of minutes within range.
    pub fn from_env() -> Result<Self, AuthError> {
        let jwt_secret = resolve_jwt_secret(
            std::env::var("JWT_SECRET_KEY").ok(),
            std::env::var("SECRET_KEY").ok(),
        )
        .ok_or_else(|| {
            AuthError::Config("JWT_SECRET_KEY or SECRET_KEY must be set".to_string())
        })?;

        let token_ttl = parse_token_ttl(std::env::var("JWT_EXPIRES_MINUTES").ok().as_deref())?;

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        Ok(Self {
            token_ttl,
            cookie_secure,
            ..Self::new(jwt_secret)
        })
    }

    /// Token TTL as a chrono duration for claim arithmetic.
    ///
    /// `None` if the TTL does not fit a `chrono::Duration`, which can only
    /// happen when `token_ttl` was set by hand past the configured maximum.
    pub fn token_ttl_chrono(&self) -> Option<chrono::Duration> {
        i64::try_from(self.token_ttl.as_secs())
            .ok()
            .and_then(chrono::Duration::try_seconds)
    }
}

/// Parses `JWT_EXPIRES_MINUTES`. Unset or blank means the default.
pub fn parse_token_ttl(value: Option<&str>) -> Result<Duration, AuthError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(Duration::from_secs(DEFAULT_TOKEN_TTL_MINUTES * 60));
    };

    value
        .parse::<u64>()
        .ok()
        .filter(|minutes| (1..=MAX_TOKEN_TTL_MINUTES).contains(minutes))
        .map(|minutes| Duration::from_secs(minutes * 60))
        .ok_or_else(|| {
            AuthError::Config(format!(
                "JWT_EXPIRES_MINUTES must be between 1 and {MAX_TOKEN_TTL_MINUTES}, got {value:?}"
            ))
        })
}

/// Picks the signing secret: `JWT_SECRET_KEY` wins, `SECRET_KEY` is the
/// fallback. Blank values count as unset.
pub fn resolve_jwt_secret(jwt_secret: Option<String>, secret: Option<String>) -> Option<String> {
    jwt_secret
        .filter(|s| !s.trim().is_empty())
        .or_else(|| secret.filter(|s| !s.trim().is_empty()))
}
