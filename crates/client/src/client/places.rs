//! Place API operations.

use super::HbnbClient;
use crate::error::Result;
use hbnb_core::listing::{CreatePlaceRequest, Place};
use uuid::Uuid;

impl HbnbClient {
    /// List all places.
    pub async fn list_places(&self) -> Result<Vec<Place>> {
        let response = self.get("/places/").send().await?;
        self.handle_response(response).await
    }

    /// Create a place owned by the authenticated user.
    pub async fn create_place(&self, request: &CreatePlaceRequest) -> Result<Place> {
        let response = self.post("/places/").json(request).send().await?;
        self.handle_response(response).await
    }

    /// Get place by ID.
    pub async fn get_place(&self, id: Uuid) -> Result<Place> {
        let response = self.get(&format!("/places/{}", id)).send().await?;
        self.handle_response(response).await
    }
}
