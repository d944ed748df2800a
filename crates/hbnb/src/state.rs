//! Application state shared by every request handler.
//!
//! The facade holds the repository trait objects; the auth state shares the
//! same user repository so tokens resolve against the same store.

use std::sync::Arc;

use hbnb_auth::{AuthConfig, AuthState};

use crate::config::Config;
use crate::facade::HbnbFacade;

#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<HbnbFacade>,
    pub auth: AuthState,
}

impl AppState {
    fn build(facade: HbnbFacade, auth_config: AuthConfig) -> Self {
        let auth = AuthState::new(facade.user_repository(), auth_config);
        Self {
            facade: Arc::new(facade),
            auth,
        }
    }
}

impl AsRef<AuthState> for AppState {
    fn as_ref(&self) -> &AuthState {
        &self.auth
    }
}

// ============================================================================
// Factory functions for each storage backend
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage. Data is lost on restart.
        pub async fn new(_config: &Config, auth_config: AuthConfig) -> anyhow::Result<Self> {
            let repo = Arc::new(InMemoryRepository::new());
            tracing::info!("Using in-memory storage");
            Ok(Self::build(HbnbFacade::from_repository(repo), auth_config))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage at the `DATABASE_URL` path.
        pub async fn new(config: &Config, auth_config: AuthConfig) -> anyhow::Result<Self> {
            let path = config.sqlite_path();
            let repo = Arc::new(SqliteRepository::new(path).await?);
            tracing::info!(path = %path, "Using SQLite storage");
            Ok(Self::build(HbnbFacade::from_repository(repo), auth_config))
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// In-memory state with a fixed signing secret.
    fn default() -> Self {
        let repo = Arc::new(crate::storage::InMemoryRepository::new());
        Self::build(
            HbnbFacade::from_repository(repo),
            AuthConfig::new("test-secret"),
        )
    }
}
