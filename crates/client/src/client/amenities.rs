//! Amenity API operations.

use super::HbnbClient;
use crate::error::Result;
use hbnb_core::listing::{Amenity, CreateAmenityRequest};

impl HbnbClient {
    /// List all amenities.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>> {
        let response = self.get("/amenities/").send().await?;
        self.handle_response(response).await
    }

    /// Create an amenity.
    pub async fn create_amenity(&self, request: &CreateAmenityRequest) -> Result<Amenity> {
        let response = self.post("/amenities/").json(request).send().await?;
        self.handle_response(response).await
    }
}
