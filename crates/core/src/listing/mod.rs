mod error;
mod requests;
mod types;
mod validation;

pub use error::{AmenityError, PlaceError, ReviewError, UserError};
pub use requests::{
    CreateAmenityRequest, CreatePlaceRequest, CreateReviewRequest, CreateUserRequest,
    LoginRequest, MessageResponse, TokenResponse, UpdateAmenityRequest, UpdatePlaceRequest,
    UpdateReviewRequest, UpdateUserRequest,
};
pub use types::{Amenity, Place, Review, User};
pub use validation::{
    validate_amenity_description, validate_amenity_name, validate_email, validate_first_name,
    validate_last_name, validate_latitude, validate_longitude, validate_password,
    validate_place_description, validate_price, validate_rating, validate_review_text,
    validate_title,
};
