pub mod amenities;
pub mod error;
pub mod health;
mod path;
pub mod places;
pub mod reviews;
pub mod users;

pub use error::AppError;
