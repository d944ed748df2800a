use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use hbnb_auth::auth_routes;

use crate::{
    handlers::{
        amenities::{create_amenity, delete_amenity, get_amenity, list_amenities, update_amenity},
        health::{livez, readyz},
        places::{
            create_place, get_place, list_place_reviews, list_places, rent_place, update_place,
        },
        reviews::{create_review, delete_review, get_review, list_reviews, update_review},
        users::{create_user, get_user, list_user_places, list_users, update_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Collection routes answer with and without the trailing slash.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let api_routes = Router::new()
        // User routes
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
        .route("/users/{id}/places", get(list_user_places))
        // Place routes
        .route("/places", get(list_places).post(create_place))
        .route("/places/", get(list_places).post(create_place))
        .route("/places/{id}", get(get_place).put(update_place))
        .route("/places/{id}/rent", post(rent_place))
        .route("/places/{id}/reviews", get(list_place_reviews))
        // Review routes
        .route("/reviews", get(list_reviews).post(create_review))
        .route("/reviews/", get(list_reviews).post(create_review))
        .route(
            "/reviews/{id}",
            get(get_review).put(update_review).delete(delete_review),
        )
        // Amenity routes
        .route("/amenities", get(list_amenities).post(create_amenity))
        .route("/amenities/", get(list_amenities).post(create_amenity))
        .route(
            "/amenities/{id}",
            get(get_amenity).put(update_amenity).delete(delete_amenity),
        )
        .nest("/auth", auth_routes())
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use hbnb_auth::issue_token;
    use hbnb_core::auth::Actor;
    use hbnb_core::listing::{CreateUserRequest, User};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    fn test_app(state: &AppState) -> Router {
        create_app(state.clone(), Duration::from_secs(10))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    /// Registers a user directly through the facade and returns a token for it.
    async fn user_with_token(state: &AppState, email: &str, is_admin: bool) -> (User, String) {
        let seeder = Actor::new(Uuid::nil(), true);
        let request = CreateUserRequest::new(email, "Jane", "Doe", "secret").with_admin(is_admin);
        let user = state
            .facade
            .create_user(Some(&seeder), request)
            .await
            .unwrap();
        let token = issue_token(&state.auth.config, &user).unwrap();
        (user, token)
    }

    async fn create_place_as(app: &Router, token: &str) -> Value {
        let (status, place) = send(
            app,
            json_request(
                "POST",
                "/api/v1/places/",
                Some(token),
                json!({ "title": "Loft", "price": 80.0, "latitude": 48.85, "longitude": 2.35 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        place
    }

    // ==================== Health ====================

    #[tokio::test]
    async fn test_health_probes() {
        let state = AppState::default();
        let app = test_app(&state);

        let (status, _) = send(&app, empty_request("GET", "/livez", None)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, empty_request("GET", "/readyz", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["healthy"], true);
    }

    // ==================== Users ====================

    #[tokio::test]
    async fn test_list_users_empty() {
        let state = AppState::default();
        let app = test_app(&state);

        let (status, body) = send(&app, empty_request("GET", "/api/v1/users/", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let state = AppState::default();
        let app = test_app(&state);

        let (status, user) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/users/",
                None,
                json!({
                    "email": "john@example.com",
                    "first_name": "John",
                    "last_name": "Smith",
                    "password": "secret"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user["email"], "john@example.com");
        assert_eq!(user["is_admin"], false);
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());

        let user_id = user["id"].as_str().unwrap();
        let (status, fetched) = send(
            &app,
            empty_request("GET", &format!("/api/v1/users/{user_id}"), None),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn test_create_user_validation_errors() {
        let state = AppState::default();
        let app = test_app(&state);

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/users",
                None,
                json!({ "email": "not-an-email", "first_name": "J", "last_name": "S", "password": "x" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid email"));

        // Missing field
        let (status, body) = send(
            &app,
            json_request("POST", "/api/v1/users/", None, json!({ "email": "a@b.io" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/users/",
                None,
                json!({ "email": "a@b.io", "first_name": "A", "last_name": "B", "password": "x", "is_owner": true }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "is_owner is set by listing a place");

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/users/",
                None,
                json!({ "email": "a@b.io", "first_name": "A", "last_name": "B", "password": "x", "nickname": "ab" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("nickname"));
    }

    #[tokio::test]
    async fn test_create_admin_needs_admin_token() {
        let state = AppState::default();
        let app = test_app(&state);
        let (_, admin_token) = user_with_token(&state, "admin@example.com", true).await;
        let payload = json!({
            "email": "root@example.com",
            "first_name": "Root",
            "last_name": "User",
            "password": "secret",
            "is_admin": true
        });

        let (status, _) = send(
            &app,
            json_request("POST", "/api/v1/users/", None, payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, user) = send(
            &app,
            json_request("POST", "/api/v1/users/", Some(&admin_token), payload),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(user["is_admin"], true);
    }

    #[tokio::test]
    async fn test_get_nonexistent_user() {
        let state = AppState::default();
        let app = test_app(&state);

        let (status, body) = send(
            &app,
            empty_request(
                "GET",
                "/api/v1/users/00000000-0000-0000-0000-000000000000",
                None,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn test_update_user_rules() {
        let state = AppState::default();
        let app = test_app(&state);
        let (jane, jane_token) = user_with_token(&state, "jane@example.com", false).await;
        let (_, john_token) = user_with_token(&state, "john@example.com", false).await;
        let uri = format!("/api/v1/users/{}", jane.id);

        let (status, _) = send(
            &app,
            json_request("PUT", &uri, None, json!({ "first_name": "Janet" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            json_request("PUT", &uri, Some(&john_token), json!({ "first_name": "Janet" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = send(
            &app,
            json_request("PUT", &uri, Some(&jane_token), json!({ "password": "new" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Password cannot be changed through a profile update"
        );

        let (status, _) = send(
            &app,
            json_request("PUT", &uri, Some(&jane_token), json!({ "nickname": "JJ" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            &app,
            json_request("PUT", &uri, Some(&jane_token), json!({ "first_name": "Janet" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["first_name"], "Janet");
    }

    // ==================== Auth ====================

    #[tokio::test]
    async fn test_login_then_protected() {
        let state = AppState::default();
        let app = test_app(&state);
        user_with_token(&state, "jane@example.com", false).await;

        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({ "email": "jane@example.com", "password": "wrong" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({ "email": "jane@example.com", "password": "secret" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["access_token"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            empty_request("GET", "/api/v1/auth/protected", Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome, Jane Doe!");
    }

    // ==================== Places ====================

    #[tokio::test]
    async fn test_create_place_requires_token() {
        let state = AppState::default();
        let app = test_app(&state);

        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/places/",
                None,
                json!({ "title": "Loft", "price": 80.0, "latitude": 0.0, "longitude": 0.0 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_place_lifecycle() {
        let state = AppState::default();
        let app = test_app(&state);
        let (owner, owner_token) = user_with_token(&state, "owner@example.com", false).await;
        let (_, guest_token) = user_with_token(&state, "guest@example.com", false).await;

        let place = create_place_as(&app, &owner_token).await;
        assert_eq!(place["owner_id"], owner.id.to_string());
        let place_id = place["id"].as_str().unwrap();

        let (status, fetched) = send(
            &app,
            empty_request("GET", &format!("/api/v1/places/{place_id}"), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, place);

        let (status, owned) = send(
            &app,
            empty_request("GET", &format!("/api/v1/users/{}/places", owner.id), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(owned, json!([place]));

        let (status, _) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/v1/places/{place_id}"),
                Some(&guest_token),
                json!({ "price": 1.0 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, updated) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/v1/places/{place_id}"),
                Some(&owner_token),
                json!({ "price": 95.5 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["price"], 95.5);

        let (status, renter) = send(
            &app,
            empty_request(
                "POST",
                &format!("/api/v1/places/{place_id}/rent"),
                Some(&guest_token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renter["rented_places"], json!([place_id]));
    }

    #[tokio::test]
    async fn test_create_place_unknown_owner() {
        let state = AppState::default();
        let app = test_app(&state);
        let (_, admin_token) = user_with_token(&state, "admin@example.com", true).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/places/",
                Some(&admin_token),
                json!({
                    "title": "Loft",
                    "price": 80.0,
                    "latitude": 0.0,
                    "longitude": 0.0,
                    "owner_id": Uuid::new_v4()
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Owner not found");
    }

    #[tokio::test]
    async fn test_invalid_place_fields() {
        let state = AppState::default();
        let app = test_app(&state);
        let (_, token) = user_with_token(&state, "owner@example.com", false).await;

        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/places/",
                Some(&token),
                json!({ "title": "Loft", "price": 80.0, "latitude": 91.0, "longitude": 0.0 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Latitude"));
    }

    // ==================== Reviews ====================

    #[tokio::test]
    async fn test_review_flow() {
        let state = AppState::default();
        let app = test_app(&state);
        let (_, owner_token) = user_with_token(&state, "owner@example.com", false).await;
        let (guest, guest_token) = user_with_token(&state, "guest@example.com", false).await;
        let place = create_place_as(&app, &owner_token).await;
        let place_id = place["id"].as_str().unwrap();
        let review_body = |rating: i64| json!({ "text": "Lovely", "rating": rating, "place_id": place_id });

        let (status, body) = send(
            &app,
            json_request("POST", "/api/v1/reviews/", Some(&owner_token), review_body(5)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "You cannot review your own place");

        let (status, _) = send(
            &app,
            json_request("POST", "/api/v1/reviews/", Some(&guest_token), review_body(6)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, review) = send(
            &app,
            json_request("POST", "/api/v1/reviews/", Some(&guest_token), review_body(5)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(review["user_id"], guest.id.to_string());
        let review_id = review["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            json_request("POST", "/api/v1/reviews/", Some(&guest_token), review_body(4)),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "You have already reviewed this place");

        let (status, reviews) = send(
            &app,
            empty_request("GET", &format!("/api/v1/places/{place_id}/reviews"), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reviews, json!([review]));

        let (status, updated) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/v1/reviews/{review_id}"),
                Some(&guest_token),
                json!({ "rating": 3 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["rating"], 3);

        let (status, body) = send(
            &app,
            empty_request(
                "DELETE",
                &format!("/api/v1/reviews/{review_id}"),
                Some(&guest_token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Review deleted successfully");

        let (status, place) = send(
            &app,
            empty_request("GET", &format!("/api/v1/places/{place_id}"), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(place["reviews"], json!([]));
    }

    #[tokio::test]
    async fn test_reviews_for_missing_place() {
        let state = AppState::default();
        let app = test_app(&state);

        let (status, body) = send(
            &app,
            empty_request(
                "GET",
                &format!("/api/v1/places/{}/reviews", Uuid::new_v4()),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Place not found");
    }

    #[rstest]
    #[case("/api/v1/users/not-a-uuid", "User not found")]
    #[case("/api/v1/users/42/places", "User not found")]
    #[case("/api/v1/places/not-a-uuid", "Place not found")]
    #[case("/api/v1/places/not-a-uuid/reviews", "Place not found")]
    #[case("/api/v1/reviews/1234", "Review not found")]
    #[case("/api/v1/amenities/wifi", "Amenity not found")]
    #[tokio::test]
    async fn test_malformed_ids_are_json_not_found(#[case] uri: &str, #[case] message: &str) {
        let state = AppState::default();
        let app = test_app(&state);

        let response = app.oneshot(empty_request("GET", uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": message }));
    }

    #[tokio::test]
    async fn test_malformed_id_on_authenticated_routes() {
        let state = AppState::default();
        let app = test_app(&state);
        let (_, token) = user_with_token(&state, "jane@example.com", false).await;

        let (status, body) = send(
            &app,
            empty_request("DELETE", "/api/v1/reviews/not-a-uuid", Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Review not found");

        let (status, body) = send(
            &app,
            empty_request("POST", "/api/v1/places/not-a-uuid/rent", Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Place not found");
    }

    // ==================== Amenities ====================

    #[tokio::test]
    async fn test_amenity_crud() {
        let state = AppState::default();
        let app = test_app(&state);
        let (_, token) = user_with_token(&state, "jane@example.com", false).await;

        let (status, _) = send(
            &app,
            json_request("POST", "/api/v1/amenities/", None, json!({ "name": "Wi-Fi" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, amenity) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/amenities/",
                Some(&token),
                json!({ "name": "Wi-Fi", "description": "Fast" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let amenity_id = amenity["id"].as_str().unwrap();

        let (status, _) = send(
            &app,
            json_request("POST", "/api/v1/amenities", Some(&token), json!({ "name": "Wi-Fi" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, updated) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/v1/amenities/{amenity_id}"),
                Some(&token),
                json!({ "name": "Free Wi-Fi" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Free Wi-Fi");

        let (status, list) = send(&app, empty_request("GET", "/api/v1/amenities/", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([updated]));

        let (status, _) = send(
            &app,
            empty_request(
                "DELETE",
                &format!("/api/v1/amenities/{amenity_id}"),
                Some(&token),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            empty_request("GET", &format!("/api/v1/amenities/{amenity_id}"), None),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
