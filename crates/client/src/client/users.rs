//! User API operations.

use super::HbnbClient;
use crate::error::Result;
use hbnb_core::listing::{CreateUserRequest, User};
use uuid::Uuid;

impl HbnbClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self.get("/users/").send().await?;
        self.handle_response(response).await
    }

    /// Register a new user.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        let response = self.post("/users/").json(request).send().await?;
        self.handle_response(response).await
    }

    /// Get user by ID.
    pub async fn get_user(&self, id: Uuid) -> Result<User> {
        let response = self.get(&format!("/users/{}", id)).send().await?;
        self.handle_response(response).await
    }
}
