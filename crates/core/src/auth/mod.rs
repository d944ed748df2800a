mod error;
mod functions;
mod types;

pub use error::AuthError;
pub use functions::{build_claims, calculate_expiry, can_modify, parse_bearer_token};
pub use types::{Actor, Claims};
