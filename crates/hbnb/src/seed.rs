//! Start-up data.

use hbnb_core::auth::Actor;
use hbnb_core::listing::CreateUserRequest;
use uuid::Uuid;

use crate::config::Config;
use crate::facade::{HbnbFacade, ServiceError};

/// Creates the bootstrap administrator from `ADMIN_EMAIL` / `ADMIN_PASSWORD`
/// unless a user with that email already exists.
///
/// Returns `true` when a user was created.
pub async fn seed_admin(facade: &HbnbFacade, config: &Config) -> Result<bool, ServiceError> {
    let Some((email, password)) = config.admin_credentials() else {
        tracing::debug!("No bootstrap admin configured");
        return Ok(false);
    };

    if facade.get_user_by_email(email).await?.is_some() {
        tracing::debug!(email = %email, "Bootstrap admin already present");
        return Ok(false);
    }

    let seeder = Actor::new(Uuid::nil(), true);
    let request = CreateUserRequest::new(email, "Admin", "HBnB", password).with_admin(true);
    let admin = facade.create_user(Some(&seeder), request).await?;

    tracing::info!(user_id = %admin.id, email = %admin.email, "Seeded bootstrap admin");
    Ok(true)
}
