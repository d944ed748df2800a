//! Fixtures shared by this crate's tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use hbnb_core::listing::User;
use hbnb_core::storage::{RepositoryError, Result, UserRepository};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{hash_password, AuthConfig, AuthState};

#[derive(Default)]
pub struct FakeUsers {
    users: RwLock<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(())
    }

    async fn add_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| RepositoryError::not_found("User", user_id))?;
        user.become_owner();
        user.add_owned_place(place_id)
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        Ok(user.clone())
    }

    async fn remove_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<()> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&user_id) {
            user.remove_owned_place(place_id);
        }
        Ok(())
    }

    async fn add_rented_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| RepositoryError::not_found("User", user_id))?;
        user.rent_place(place_id);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> Result<()> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("User", id))
    }
}

/// A user whose password is `password`.
pub fn test_user(email: &str) -> User {
    let hash = hash_password("password").unwrap();
    User::new(email, "Jane", "Doe", hash).unwrap()
}

pub fn test_state(users: Vec<User>) -> AuthState {
    let repo = FakeUsers {
        users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
    };
    AuthState::new(Arc::new(repo), AuthConfig::new("test-secret"))
}
