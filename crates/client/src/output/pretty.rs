//! Pretty output formatting.

use hbnb_core::listing::{Amenity, Place, Review, User};

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Email: {}",
        user.full_name(),
        user.id,
        user.email
    );
    if user.is_admin {
        output.push_str("\n  Role: admin");
    }
    if !user.owned_places.is_empty() {
        output.push_str(&format!("\n  Owns: {} place(s)", user.owned_places.len()));
    }
    if !user.rented_places.is_empty() {
        output.push_str(&format!("\n  Rented: {} place(s)", user.rented_places.len()));
    }
    output
}

/// Format users for display.
pub fn format_users(users: &[User]) -> String {
    format_list("USERS", "No users found.", users, format_user)
}

/// Format a place for display.
pub fn format_place(place: &Place) -> String {
    let mut output = format!(
        "{} ({:.2}/night)\n  ID: {}\n  Owner: {}\n  Location: {}, {}",
        place.title, place.price, place.id, place.owner_id, place.latitude, place.longitude
    );
    if let Some(desc) = &place.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if !place.amenities.is_empty() {
        output.push_str(&format!("\n  Amenities: {}", place.amenities.len()));
    }
    if !place.reviews.is_empty() {
        output.push_str(&format!("\n  Reviews: {}", place.reviews.len()));
    }
    output
}

/// Format places for display.
pub fn format_places(places: &[Place]) -> String {
    format_list("PLACES", "No places found.", places, format_place)
}

/// Format a review for display.
pub fn format_review(review: &Review) -> String {
    format!(
        "{} {}\n  ID: {}\n  Place: {}\n  Author: {}",
        stars(review.rating),
        review.text,
        review.id,
        review.place_id,
        review.user_id
    )
}

/// Format reviews for display.
pub fn format_reviews(reviews: &[Review]) -> String {
    format_list("REVIEWS", "No reviews found.", reviews, format_review)
}

/// Format an amenity for display.
pub fn format_amenity(amenity: &Amenity) -> String {
    let mut output = format!("{}\n  ID: {}", amenity.name, amenity.id);
    if let Some(desc) = &amenity.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format amenities for display.
pub fn format_amenities(amenities: &[Amenity]) -> String {
    format_list("AMENITIES", "No amenities found.", amenities, format_amenity)
}

fn format_list<T>(title: &str, empty: &str, items: &[T], format_item: fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", title, items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format_item(item)));
        output.push('\n');
    }
    output
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "*".repeat(filled), ".".repeat(5 - filled))
}
