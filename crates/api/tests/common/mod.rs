#![allow(dead_code)] // each test binary uses a different subset of helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use heartboard_api::auth::jwt::JwtConfig;
use heartboard_api::config::ServerConfig;
use heartboard_api::router::build_app_router;
use heartboard_api::state::AppState;

/// Email that receives the admin account role at registration in tests.
pub const TEST_ADMIN_EMAIL: &str = "admin@heartboard.test";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a fixed JWT secret, and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_email: Some(TEST_ADMIN_EMAIL.to_string()),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_days: 30,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Delegates to [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<axum::body::Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<axum::body::Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response<axum::body::Body> {
    send(app, Method::PATCH, uri, Some(token), None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<axum::body::Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Consume a response body and parse it as JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Register a user via the API and return `(token, user_id)`.
pub async fn register_user(app: &Router, name: &str, email: &str) -> (String, i64) {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": "test_password_123!",
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", body).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "registration should succeed"
    );
    let json = body_json(response).await;
    let token = json["token"].as_str().unwrap().to_string();
    let user_id = json["user"]["id"].as_i64().unwrap();
    (token, user_id)
}

/// Create an event via the API and return its id.
pub async fn create_event(app: &Router, token: &str, name: &str) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "date": "2026-12-24T18:00:00Z",
    });
    let response = post_json_auth(app.clone(), "/api/v1/events", token, body).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "event creation should succeed"
    );
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Share an event with a user (by email) at the given role.
pub async fn share_event(app: &Router, token: &str, event_id: i64, email: &str, role: &str) {
    let body = serde_json::json!({ "email": email, "role": role });
    let uri = format!("/api/v1/events/{event_id}/share");
    let response = post_json_auth(app.clone(), &uri, token, body).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "sharing should succeed"
    );
}

/// Create a gift via the API and return its id.
pub async fn create_gift(app: &Router, token: &str, event_id: i64, name: &str) -> i64 {
    let body = serde_json::json!({
        "event_id": event_id,
        "name": name,
        "price": 25.0,
    });
    let response = post_json_auth(app.clone(), "/api/v1/gifts", token, body).await;
    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "gift creation should succeed"
    );
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
