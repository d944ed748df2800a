//! HTTP client for the HBnB API.

pub mod amenities;
pub mod auth;
pub mod places;
pub mod reviews;
pub mod users;

use crate::error::{ClientError, Result};

const API_PREFIX: &str = "/api/v1";

/// HTTP client for the HBnB API.
#[derive(Debug, Clone)]
pub struct HbnbClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HbnbClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Create from environment (HBNB_URL or default, HBNB_TOKEN if set).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("HBNB_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let client = Self::new(base_url);
        match std::env::var("HBNB_TOKEN") {
            Ok(token) => client.with_token(token),
            Err(_) => client,
        }
    }

    /// Send a bearer token with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into()).filter(|t| !t.is_empty());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an API endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.get(self.url(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.post(self.url(path)))
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.delete(self.url(path)))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Decode a success body or turn the `{ "error": ... }` body into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(status_error(status.as_u16(), &body))
    }
}

/// Build the error for a non-success response.
fn status_error(status: u16, body: &str) -> ClientError {
    let message = error_message(body);
    match status {
        401 => ClientError::Unauthorized { message },
        404 => ClientError::NotFound { resource: message },
        _ => ClientError::ServerError { status, message },
    }
}

/// Pull the message out of an API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_has_api_prefix() {
        let client = HbnbClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.url("/places/"),
            "http://localhost:3000/api/v1/places/"
        );
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = HbnbClient::new("http://localhost:3000").with_token("");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(r#"{"error":"Place not found"}"#),
            "Place not found"
        );
        assert_eq!(error_message("Request Timeout\n"), "Request Timeout");
    }

    #[test]
    fn test_status_error_variants() {
        assert!(matches!(
            status_error(401, r#"{"error":"missing access token"}"#),
            ClientError::Unauthorized { ref message } if message == "missing access token"
        ));
        assert!(matches!(
            status_error(404, r#"{"error":"User not found"}"#),
            ClientError::NotFound { ref resource } if resource == "User not found"
        ));
        assert!(matches!(
            status_error(403, r#"{"error":"Action not allowed"}"#),
            ClientError::ServerError { status: 403, .. }
        ));
    }
}
