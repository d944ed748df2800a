//! Application state for auth.

use axum::extract::FromRef;
use hbnb_core::storage::UserRepository;
use std::sync::Arc;

use crate::config::AuthConfig;

/// Shared state for auth handlers and extractors.
#[derive(Clone)]
pub struct AuthState {
    pub users: Arc<dyn UserRepository>,
    pub config: AuthConfig,
}

impl AuthState {
    pub fn new(users: Arc<dyn UserRepository>, config: AuthConfig) -> Self {
        Self { users, config }
    }
}

/// Allows AuthState to be extracted from a parent state.
impl<S> FromRef<S> for AuthState
where
    S: AsRef<AuthState>,
{
    fn from_ref(state: &S) -> Self {
        state.as_ref().clone()
    }
}
