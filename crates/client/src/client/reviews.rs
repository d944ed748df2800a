//! Review API operations.

use super::HbnbClient;
use crate::error::Result;
use hbnb_core::listing::{CreateReviewRequest, MessageResponse, Review};
use uuid::Uuid;

impl HbnbClient {
    /// List all reviews.
    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        let response = self.get("/reviews/").send().await?;
        self.handle_response(response).await
    }

    /// List the reviews of one place.
    pub async fn list_place_reviews(&self, place_id: Uuid) -> Result<Vec<Review>> {
        let response = self
            .get(&format!("/places/{}/reviews", place_id))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Post a review as the authenticated user.
    pub async fn create_review(&self, request: &CreateReviewRequest) -> Result<Review> {
        let response = self.post("/reviews/").json(request).send().await?;
        self.handle_response(response).await
    }

    /// Delete review by ID.
    pub async fn delete_review(&self, id: Uuid) -> Result<MessageResponse> {
        let response = self.delete(&format!("/reviews/{}", id)).send().await?;
        self.handle_response(response).await
    }
}
