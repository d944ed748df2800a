//! Password and token authentication for HBnB.
//!
//! This crate provides:
//! - Argon2 password hashing
//! - HS256 access tokens carrying the user id and admin flag
//! - Axum extractors for authentication (bearer header or `token` cookie)
//! - The `/login`, `/logout` and `/protected` routes

mod config;
mod error;
mod extractors;
mod handlers;
mod password;
mod state;
mod tokens;

pub use config::{resolve_jwt_secret, AuthConfig};
pub use error::AuthError;
pub use extractors::{CurrentUser, OptionalUser};
pub use handlers::{auth_routes, authenticate_user};
pub use password::{hash_password, verify_password};
pub use state::AuthState;
pub use tokens::{issue_token, verify_token};

#[cfg(test)]
mod test_support;
