//! SQLite repository implementation.
//!
//! Implements the repository traits from `hbnb_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, Params, Row};
use tokio_rusqlite::Connection;
use uuid::Uuid;

use hbnb_core::listing::{Amenity, Place, Review, User, UserError};
use hbnb_core::storage::{
    AmenityRepository, PlaceRepository, RepositoryError, Result, ReviewRepository,
    UserRepository,
};

use super::conversions::{
    format_datetime, id_list_to_json, row_to_amenity, row_to_place, row_to_review, row_to_user,
};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn query_one<T, P: Params>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
    map: fn(&Row) -> rusqlite::Result<T>,
) -> rusqlite::Result<Option<T>> {
    conn.prepare(sql)?.query_row(params, map).optional()
}

fn query_all<T, P: Params>(
    conn: &rusqlite::Connection,
    sql: &str,
    params: P,
    map: fn(&Row) -> rusqlite::Result<T>,
) -> rusqlite::Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map)?;
    rows.collect()
}

fn other_err(e: impl std::error::Error + Send + Sync + 'static) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Other(Box::new(e))
}

/// Fails with `QueryReturnedNoRows` when an UPDATE or DELETE matched nothing.
fn expect_affected(rows: usize) -> tokio_rusqlite::Result<()> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Applies `change` to the stored user and writes back its ownership and
    /// rental columns inside one transaction.
    async fn change_user_places<F>(&self, user_id: Uuid, change: F) -> Result<User>
    where
        F: FnOnce(&mut User) -> std::result::Result<(), UserError> + Send + 'static,
    {
        let id_str = user_id.to_string();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let mut user = query_one(&tx, schema::SELECT_USER_BY_ID, [&id_str], row_to_user)
                    .map_err(wrap_err)?
                    .ok_or_else(|| wrap_err(rusqlite::Error::QueryReturnedNoRows))?;
                change(&mut user).map_err(other_err)?;

                let owned_places = id_list_to_json(&user.owned_places).map_err(other_err)?;
                let rented_places = id_list_to_json(&user.rented_places).map_err(other_err)?;
                tx.execute(
                    schema::UPDATE_USER_PLACES,
                    rusqlite::params![
                        id_str,
                        user.is_owner,
                        owned_places,
                        rented_places,
                        format_datetime(&user.updated_at)
                    ],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(user)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", user_id.to_string()))
    }

    /// Applies `change` to the stored place and writes back its `reviews`
    /// column inside one transaction.
    async fn change_place_reviews<F>(&self, place_id: Uuid, change: F) -> Result<()>
    where
        F: FnOnce(&mut Place) + Send + 'static,
    {
        let id_str = place_id.to_string();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let mut place =
                    query_one(&tx, schema::SELECT_PLACE_BY_ID, [&id_str], row_to_place)
                        .map_err(wrap_err)?
                        .ok_or_else(|| wrap_err(rusqlite::Error::QueryReturnedNoRows))?;
                change(&mut place);

                let reviews = id_list_to_json(&place.reviews).map_err(other_err)?;
                tx.execute(
                    schema::UPDATE_PLACE_REVIEWS,
                    rusqlite::params![id_str, reviews, format_datetime(&place.updated_at)],
                )
                .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Place", place_id.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                query_one(conn, schema::SELECT_USER_BY_ID, [&id_str], row_to_user)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id.to_string()))
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_string();

        self.conn
            .call(move |conn| {
                query_one(conn, schema::SELECT_USER_BY_EMAIL, [&email], row_to_user)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.conn
            .call(|conn| {
                query_all(conn, schema::SELECT_USERS, rusqlite::params![], row_to_user)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User"))
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let id = user.id.to_string();
        let email = user.email.clone();
        let first_name = user.first_name.clone();
        let last_name = user.last_name.clone();
        let password_hash = user.password_hash.clone();
        let is_admin = user.is_admin;
        let is_owner = user.is_owner;
        let owned_places = id_list_to_json(&user.owned_places)?;
        let rented_places = id_list_to_json(&user.rented_places)?;
        let created_at = format_datetime(&user.created_at);
        let updated_at = format_datetime(&user.updated_at);
        let user_email = user.email.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_USER,
                    rusqlite::params![
                        id,
                        email,
                        first_name,
                        last_name,
                        password_hash,
                        is_admin,
                        is_owner,
                        owned_places,
                        rented_places,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", user_email))
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        let id = user.id.to_string();
        let email = user.email.clone();
        let first_name = user.first_name.clone();
        let last_name = user.last_name.clone();
        let password_hash = user.password_hash.clone();
        let is_admin = user.is_admin;
        let updated_at = format_datetime(&user.updated_at);
        let user_id = user.id;
        let user_email = user.email.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_USER,
                        rusqlite::params![
                            id,
                            email,
                            first_name,
                            last_name,
                            password_hash,
                            is_admin,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| match map_tokio_rusqlite_error(e, "User") {
                RepositoryError::NotFound { .. } => RepositoryError::not_found("User", user_id),
                RepositoryError::AlreadyExists { .. } => {
                    RepositoryError::already_exists("User", user_email)
                }
                other => other,
            })
    }

    async fn add_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User> {
        self.change_user_places(user_id, move |user| {
            user.become_owner();
            user.add_owned_place(place_id)
        })
        .await
    }

    async fn remove_owned_place(&self, user_id: Uuid, place_id: Uuid) -> Result<()> {
        self.change_user_places(user_id, move |user| {
            user.remove_owned_place(place_id);
            Ok(())
        })
        .await
        .map(|_| ())
    }

    async fn add_rented_place(&self, user_id: Uuid, place_id: Uuid) -> Result<User> {
        self.change_user_places(user_id, move |user| {
            user.rent_place(place_id);
            Ok(())
        })
        .await
    }

    async fn delete_user(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_USER, [&id_str])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "User", id.to_string()))
    }
}

// ============================================================================
// PlaceRepository implementation
// ============================================================================

#[async_trait]
impl PlaceRepository for SqliteRepository {
    async fn get_place(&self, id: Uuid) -> Result<Option<Place>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                query_one(conn, schema::SELECT_PLACE_BY_ID, [&id_str], row_to_place)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Place", id.to_string()))
    }

    async fn list_places(&self) -> Result<Vec<Place>> {
        self.conn
            .call(|conn| {
                query_all(conn, schema::SELECT_PLACES, rusqlite::params![], row_to_place)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Place"))
    }

    async fn list_places_by_owner(&self, owner_id: Uuid) -> Result<Vec<Place>> {
        let owner_id_str = owner_id.to_string();

        self.conn
            .call(move |conn| {
                query_all(
                    conn,
                    schema::SELECT_PLACES_BY_OWNER,
                    [&owner_id_str],
                    row_to_place,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Place"))
    }

    async fn create_place(&self, place: &Place) -> Result<()> {
        let id = place.id.to_string();
        let title = place.title.clone();
        let description = place.description.clone();
        let price = place.price;
        let latitude = place.latitude;
        let longitude = place.longitude;
        let owner_id = place.owner_id.to_string();
        let amenities = id_list_to_json(&place.amenities)?;
        let reviews = id_list_to_json(&place.reviews)?;
        let created_at = format_datetime(&place.created_at);
        let updated_at = format_datetime(&place.updated_at);
        let place_id = place.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PLACE,
                    rusqlite::params![
                        id,
                        title,
                        description,
                        price,
                        latitude,
                        longitude,
                        owner_id,
                        amenities,
                        reviews,
                        created_at,
                        updated_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Place", place_id))
    }

    async fn update_place(&self, place: &Place) -> Result<()> {
        let id = place.id.to_string();
        let title = place.title.clone();
        let description = place.description.clone();
        let price = place.price;
        let latitude = place.latitude;
        let longitude = place.longitude;
        let owner_id = place.owner_id.to_string();
        let amenities = id_list_to_json(&place.amenities)?;
        let updated_at = format_datetime(&place.updated_at);
        let place_id = place.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PLACE,
                        rusqlite::params![
                            id,
                            title,
                            description,
                            price,
                            latitude,
                            longitude,
                            owner_id,
                            amenities,
                            updated_at
                        ],
                    )
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Place", place_id))
    }

    async fn add_review(&self, place_id: Uuid, review_id: Uuid) -> Result<()> {
        self.change_place_reviews(place_id, move |place| place.add_review(review_id))
            .await
    }

    async fn remove_review(&self, place_id: Uuid, review_id: Uuid) -> Result<()> {
        self.change_place_reviews(place_id, move |place| place.remove_review(review_id))
            .await
    }

    async fn delete_place(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_PLACE, [&id_str])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Place", id.to_string()))
    }
}

// ============================================================================
// ReviewRepository implementation
// ============================================================================

#[async_trait]
impl ReviewRepository for SqliteRepository {
    async fn get_review(&self, id: Uuid) -> Result<Option<Review>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                query_one(conn, schema::SELECT_REVIEW_BY_ID, [&id_str], row_to_review)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", id.to_string()))
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.conn
            .call(|conn| {
                query_all(conn, schema::SELECT_REVIEWS, rusqlite::params![], row_to_review)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Review"))
    }

    async fn list_reviews_by_place(&self, place_id: Uuid) -> Result<Vec<Review>> {
        let place_id_str = place_id.to_string();

        self.conn
            .call(move |conn| {
                query_all(
                    conn,
                    schema::SELECT_REVIEWS_BY_PLACE,
                    [&place_id_str],
                    row_to_review,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Review"))
    }

    async fn get_review_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>> {
        let user_id_str = user_id.to_string();
        let place_id_str = place_id.to_string();

        self.conn
            .call(move |conn| {
                query_one(
                    conn,
                    schema::SELECT_REVIEW_BY_USER_AND_PLACE,
                    [&user_id_str, &place_id_str],
                    row_to_review,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Review"))
    }

    async fn create_review(&self, review: &Review) -> Result<()> {
        let id = review.id.to_string();
        let text = review.text.clone();
        let rating = review.rating;
        let user_id = review.user_id.to_string();
        let place_id = review.place_id.to_string();
        let created_at = format_datetime(&review.created_at);
        let updated_at = format_datetime(&review.updated_at);
        let review_key = format!("{}/{}", review.user_id, review.place_id);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_REVIEW,
                    rusqlite::params![id, text, rating, user_id, place_id, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", review_key))
    }

    async fn update_review(&self, review: &Review) -> Result<()> {
        let id = review.id.to_string();
        let text = review.text.clone();
        let rating = review.rating;
        let updated_at = format_datetime(&review.updated_at);
        let review_id = review.id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_REVIEW,
                        rusqlite::params![id, text, rating, updated_at],
                    )
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", review_id))
    }

    async fn delete_review(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_REVIEW, [&id_str])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Review", id.to_string()))
    }
}

// ============================================================================
// AmenityRepository implementation
// ============================================================================

#[async_trait]
impl AmenityRepository for SqliteRepository {
    async fn get_amenity(&self, id: Uuid) -> Result<Option<Amenity>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                query_one(conn, schema::SELECT_AMENITY_BY_ID, [&id_str], row_to_amenity)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Amenity", id.to_string()))
    }

    async fn get_amenity_by_name(&self, name: &str) -> Result<Option<Amenity>> {
        let name = name.to_string();

        self.conn
            .call(move |conn| {
                query_one(conn, schema::SELECT_AMENITY_BY_NAME, [&name], row_to_amenity)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Amenity"))
    }

    async fn list_amenities(&self) -> Result<Vec<Amenity>> {
        self.conn
            .call(|conn| {
                query_all(
                    conn,
                    schema::SELECT_AMENITIES,
                    rusqlite::params![],
                    row_to_amenity,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Amenity"))
    }

    async fn create_amenity(&self, amenity: &Amenity) -> Result<()> {
        let id = amenity.id.to_string();
        let name = amenity.name.clone();
        let description = amenity.description.clone();
        let created_at = format_datetime(&amenity.created_at);
        let updated_at = format_datetime(&amenity.updated_at);
        let amenity_name = amenity.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_AMENITY,
                    rusqlite::params![id, name, description, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Amenity", amenity_name))
    }

    async fn update_amenity(&self, amenity: &Amenity) -> Result<()> {
        let id = amenity.id.to_string();
        let name = amenity.name.clone();
        let description = amenity.description.clone();
        let updated_at = format_datetime(&amenity.updated_at);
        let amenity_id = amenity.id;
        let amenity_name = amenity.name.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_AMENITY,
                        rusqlite::params![id, name, description, updated_at],
                    )
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| match map_tokio_rusqlite_error(e, "Amenity") {
                RepositoryError::NotFound { .. } => {
                    RepositoryError::not_found("Amenity", amenity_id)
                }
                RepositoryError::AlreadyExists { .. } => {
                    RepositoryError::already_exists("Amenity", amenity_name)
                }
                other => other,
            })
    }

    async fn delete_amenity(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_AMENITY, [&id_str])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Amenity", id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    fn user(email: &str) -> User {
        User::new(email, "Jane", "Doe", "$argon2id$hash").unwrap()
    }

    #[tokio::test]
    async fn test_user_round_trip_keeps_relationships() {
        let repo = repo().await;
        let mut user = user("jane@example.com").with_admin(true);
        user.become_owner();
        user.add_owned_place(Uuid::new_v4()).unwrap();
        user.rent_place(Uuid::new_v4());

        repo.create_user(&user).await.unwrap();

        assert_eq!(repo.get_user(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(
            repo.get_user_by_email("jane@example.com").await.unwrap(),
            Some(user)
        );
        assert!(repo.get_user(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_duplicate_email() {
        let repo = repo().await;
        repo.create_user(&user("jane@example.com")).await.unwrap();

        let result = repo.create_user(&user("jane@example.com")).await;
        assert_eq!(
            result,
            Err(RepositoryError::already_exists("User", "jane@example.com"))
        );
    }

    #[tokio::test]
    async fn test_user_update_and_delete() {
        let repo = repo().await;
        let mut user = user("jane@example.com");
        repo.create_user(&user).await.unwrap();

        user.set_last_name("Smith").unwrap();
        repo.update_user(&user).await.unwrap();
        let stored = repo.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(stored.last_name, "Smith");

        repo.delete_user(user.id).await.unwrap();
        assert_eq!(
            repo.delete_user(user.id).await,
            Err(RepositoryError::not_found("User", user.id))
        );
        assert_eq!(
            repo.update_user(&user).await,
            Err(RepositoryError::not_found("User", user.id))
        );
    }

    #[tokio::test]
    async fn test_user_place_lists_survive_profile_update() {
        let repo = repo().await;
        let mut stale = user("jane@example.com");
        repo.create_user(&stale).await.unwrap();
        let (owned, rented) = (Uuid::new_v4(), Uuid::new_v4());

        let stored = repo.add_owned_place(stale.id, owned).await.unwrap();
        assert!(stored.is_owner);
        assert_eq!(stored.owned_places, vec![owned]);
        let stored = repo.add_rented_place(stale.id, rented).await.unwrap();
        assert_eq!(stored.rented_places, vec![rented]);

        stale.set_first_name("Janet").unwrap();
        repo.update_user(&stale).await.unwrap();
        let stored = repo.get_user(stale.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Janet");
        assert_eq!(stored.owned_places, vec![owned]);
        assert_eq!(stored.rented_places, vec![rented]);

        repo.remove_owned_place(stale.id, owned).await.unwrap();
        let stored = repo.get_user(stale.id).await.unwrap().unwrap();
        assert!(stored.owned_places.is_empty());

        let missing = Uuid::new_v4();
        assert_eq!(
            repo.add_rented_place(missing, rented).await,
            Err(RepositoryError::not_found("User", missing))
        );
    }

    #[tokio::test]
    async fn test_concurrent_review_ids_are_all_kept() {
        let repo = std::sync::Arc::new(repo().await);
        let place = Place::new("Loft", 10.0, 0.0, 0.0, Uuid::new_v4()).unwrap();
        repo.create_place(&place).await.unwrap();
        let place_id = place.id;

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add_review(place_id, Uuid::new_v4()).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = repo.get_place(place.id).await.unwrap().unwrap();
        assert_eq!(stored.reviews.len(), 20);
    }

    #[tokio::test]
    async fn test_list_users_in_creation_order() {
        let repo = repo().await;
        let first = user("a@example.com");
        let second = user("b@example.com");
        repo.create_user(&second).await.unwrap();
        repo.create_user(&first).await.unwrap();

        let ids: Vec<Uuid> = repo.list_users().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_place_round_trip() {
        let repo = repo().await;
        let owner = Uuid::new_v4();
        let mut place = Place::new("Loft", 120.5, 48.85, 2.35, owner)
            .unwrap()
            .with_description(Some("Sunny".to_string()))
            .unwrap();
        place.add_amenity(Uuid::new_v4());
        repo.create_place(&place).await.unwrap();

        assert_eq!(repo.get_place(place.id).await.unwrap(), Some(place.clone()));
        assert_eq!(
            repo.list_places_by_owner(owner).await.unwrap(),
            vec![place.clone()]
        );
        assert!(repo
            .list_places_by_owner(Uuid::new_v4())
            .await
            .unwrap()
            .is_empty());

        let review_id = Uuid::new_v4();
        repo.add_review(place.id, review_id).await.unwrap();
        place.set_price(99.0).unwrap();
        repo.update_place(&place).await.unwrap();
        let stored = repo.get_place(place.id).await.unwrap().unwrap();
        assert_eq!(stored.price, 99.0);
        assert_eq!(stored.reviews, vec![review_id]);

        repo.delete_place(place.id).await.unwrap();
        assert!(repo.list_places().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_review_one_per_user_and_place() {
        let repo = repo().await;
        let (user_id, place_id) = (Uuid::new_v4(), Uuid::new_v4());
        let review = Review::new("Lovely", 5, user_id, place_id).unwrap();
        repo.create_review(&review).await.unwrap();

        let second = Review::new("Again", 3, user_id, place_id).unwrap();
        assert!(matches!(
            repo.create_review(&second).await,
            Err(RepositoryError::AlreadyExists { .. })
        ));

        assert_eq!(
            repo.get_review_by_user_and_place(user_id, place_id)
                .await
                .unwrap(),
            Some(review.clone())
        );
        assert_eq!(
            repo.list_reviews_by_place(place_id).await.unwrap(),
            vec![review]
        );
    }

    #[tokio::test]
    async fn test_review_update() {
        let repo = repo().await;
        let mut review = Review::new("Fine", 3, Uuid::new_v4(), Uuid::new_v4()).unwrap();
        repo.create_review(&review).await.unwrap();

        review.set_rating(4).unwrap();
        review.set_text("Better than expected").unwrap();
        repo.update_review(&review).await.unwrap();

        let stored = repo.get_review(review.id).await.unwrap().unwrap();
        assert_eq!(stored.rating, 4);
        assert_eq!(stored.text, "Better than expected");
        assert_eq!(repo.list_reviews().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_amenity_duplicate_name_on_update() {
        let repo = repo().await;
        repo.create_amenity(&Amenity::new("Pool").unwrap())
            .await
            .unwrap();
        let mut wifi = Amenity::new("Wi-Fi").unwrap();
        repo.create_amenity(&wifi).await.unwrap();

        wifi.set_name("Pool").unwrap();
        assert_eq!(
            repo.update_amenity(&wifi).await,
            Err(RepositoryError::already_exists("Amenity", "Pool"))
        );
        assert!(repo.get_amenity_by_name("Wi-Fi").await.unwrap().is_some());
        assert_eq!(repo.list_amenities().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_amenity_delete_missing() {
        let repo = repo().await;
        let id = Uuid::new_v4();
        assert_eq!(
            repo.delete_amenity(id).await,
            Err(RepositoryError::not_found("Amenity", id))
        );
    }
}
