//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Relationship lists (`owned_places`, `amenities`, ...)
//! are stored as JSON arrays of UUID strings.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    is_admin INTEGER NOT NULL DEFAULT 0,
    is_owner INTEGER NOT NULL DEFAULT 0,
    owned_places TEXT NOT NULL DEFAULT '[]',
    rented_places TEXT NOT NULL DEFAULT '[]',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Places table
CREATE TABLE IF NOT EXISTS places (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    price REAL NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    owner_id TEXT NOT NULL,
    amenities TEXT NOT NULL DEFAULT '[]',
    reviews TEXT NOT NULL DEFAULT '[]',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Reviews table
CREATE TABLE IF NOT EXISTS reviews (
    id TEXT PRIMARY KEY,
    text TEXT NOT NULL,
    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    user_id TEXT NOT NULL,
    place_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (user_id, place_id)
);

-- Amenities table
CREATE TABLE IF NOT EXISTS amenities (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_places_owner_id ON places(owner_id);
CREATE INDEX IF NOT EXISTS idx_reviews_place_id ON reviews(place_id);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (id, email, first_name, last_name, password_hash, is_admin, is_owner,
                   owned_places, rented_places, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, email, first_name, last_name, password_hash, is_admin, is_owner,
       owned_places, rented_places, created_at, updated_at
FROM users
WHERE id = ?1
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
SELECT id, email, first_name, last_name, password_hash, is_admin, is_owner,
       owned_places, rented_places, created_at, updated_at
FROM users
WHERE email = ?1
"#;

pub const SELECT_USERS: &str = r#"
SELECT id, email, first_name, last_name, password_hash, is_admin, is_owner,
       owned_places, rented_places, created_at, updated_at
FROM users
ORDER BY created_at, id
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET email = ?2, first_name = ?3, last_name = ?4, password_hash = ?5, is_admin = ?6,
    updated_at = ?7
WHERE id = ?1
"#;

pub const UPDATE_USER_PLACES: &str = r#"
UPDATE users
SET is_owner = ?2, owned_places = ?3, rented_places = ?4, updated_at = ?5
WHERE id = ?1
"#;

pub const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";

// Place queries
pub const INSERT_PLACE: &str = r#"
INSERT INTO places (id, title, description, price, latitude, longitude, owner_id,
                    amenities, reviews, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const SELECT_PLACE_BY_ID: &str = r#"
SELECT id, title, description, price, latitude, longitude, owner_id,
       amenities, reviews, created_at, updated_at
FROM places
WHERE id = ?1
"#;

pub const SELECT_PLACES: &str = r#"
SELECT id, title, description, price, latitude, longitude, owner_id,
       amenities, reviews, created_at, updated_at
FROM places
ORDER BY created_at, id
"#;

pub const SELECT_PLACES_BY_OWNER: &str = r#"
SELECT id, title, description, price, latitude, longitude, owner_id,
       amenities, reviews, created_at, updated_at
FROM places
WHERE owner_id = ?1
ORDER BY created_at, id
"#;

pub const UPDATE_PLACE: &str = r#"
UPDATE places
SET title = ?2, description = ?3, price = ?4, latitude = ?5, longitude = ?6,
    owner_id = ?7, amenities = ?8, updated_at = ?9
WHERE id = ?1
"#;

pub const UPDATE_PLACE_REVIEWS: &str = "UPDATE places SET reviews = ?2, updated_at = ?3 WHERE id = ?1";

pub const DELETE_PLACE: &str = "DELETE FROM places WHERE id = ?1";

// Review queries
pub const INSERT_REVIEW: &str = r#"
INSERT INTO reviews (id, text, rating, user_id, place_id, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_REVIEW_BY_ID: &str = r#"
SELECT id, text, rating, user_id, place_id, created_at, updated_at
FROM reviews
WHERE id = ?1
"#;

pub const SELECT_REVIEWS: &str = r#"
SELECT id, text, rating, user_id, place_id, created_at, updated_at
FROM reviews
ORDER BY created_at, id
"#;

pub const SELECT_REVIEWS_BY_PLACE: &str = r#"
SELECT id, text, rating, user_id, place_id, created_at, updated_at
FROM reviews
WHERE place_id = ?1
ORDER BY created_at, id
"#;

pub const SELECT_REVIEW_BY_USER_AND_PLACE: &str = r#"
SELECT id, text, rating, user_id, place_id, created_at, updated_at
FROM reviews
WHERE user_id = ?1 AND place_id = ?2
"#;

pub const UPDATE_REVIEW: &str = r#"
UPDATE reviews
SET text = ?2, rating = ?3, updated_at = ?4
WHERE id = ?1
"#;

pub const DELETE_REVIEW: &str = "DELETE FROM reviews WHERE id = ?1";

// Amenity queries
pub const INSERT_AMENITY: &str = r#"
INSERT INTO amenities (id, name, description, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_AMENITY_BY_ID: &str = r#"
SELECT id, name, description, created_at, updated_at
FROM amenities
WHERE id = ?1
"#;

pub const SELECT_AMENITY_BY_NAME: &str = r#"
SELECT id, name, description, created_at, updated_at
FROM amenities
WHERE name = ?1
"#;

pub const SELECT_AMENITIES: &str = r#"
SELECT id, name, description, created_at, updated_at
FROM amenities
ORDER BY created_at, id
"#;

pub const UPDATE_AMENITY: &str = r#"
UPDATE amenities
SET name = ?2, description = ?3, updated_at = ?4
WHERE id = ?1
"#;

pub const DELETE_AMENITY: &str = "DELETE FROM amenities WHERE id = ?1";
