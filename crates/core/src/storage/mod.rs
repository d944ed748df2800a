mod error;
mod traits;

pub use error::{RepositoryError, Result};
pub use traits::{AmenityRepository, PlaceRepository, ReviewRepository, UserRepository};
