//! Authentication operations.

use super::HbnbClient;
use crate::error::Result;
use hbnb_core::listing::{LoginRequest, TokenResponse};

impl HbnbClient {
    /// Exchange credentials for an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.post("/auth/login").json(&request).send().await?;
        self.handle_response(response).await
    }
}
