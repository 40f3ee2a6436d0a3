//! HTTP-level integration tests for gift CRUD and the role boundaries that
//! shared users hit on gift operations.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_event, create_gift, delete_auth, get_auth, patch_auth, post_json_auth,
    put_json_auth, register_user, share_event,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create and list
// ---------------------------------------------------------------------------

/// The owner can create gifts; defaults are applied and the creator recorded.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_gift(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, owner_id) = register_user(&app, "Owner", "owner@example.com").await;
    let event_id = create_event(&app, &owner, "Birthday").await;

    let body = serde_json::json!({
        "event_id": event_id,
        "name": "Lego set",
        "price": 79.99,
        "priority": "high",
    });
    let response = post_json_auth(app, "/api/v1/gifts", &owner, body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Lego set");
    assert_eq!(json["data"]["created_by"], owner_id);
    assert_eq!(json["data"]["currency"], "USD");
    assert_eq!(json["data"]["status"], "planned");
    assert_eq!(json["data"]["is_done"], false);
}

/// A negative price is rejected with 400.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_gift_negative_price(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let event_id = create_event(&app, &owner, "Birthday").await;

    let body = serde_json::json!({
        "event_id": event_id,
        "name": "Refund",
        "price": -1.0,
    });
    let response = post_json_auth(app, "/api/v1/gifts", &owner, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A link must be an http(s) URL.
#[sqlx::test(migrations = "../../migrations")]
async fn test_create_gift_invalid_link(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let event_id = create_event(&app, &owner, "Birthday").await;

    let body = serde_json::json!({
        "event_id": event_id,
        "name": "Mystery",
        "price": 10.0,
        "link": "ftp://example.com/gift",
    });
    let response = post_json_auth(app, "/api/v1/gifts", &owner, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Listing gifts requires view access on the event and is newest-first.
#[sqlx::test(migrations = "../../migrations")]
async fn test_list_gifts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let (stranger, _) = register_user(&app, "Stranger", "stranger@example.com").await;
    let event_id = create_event(&app, &owner, "Birthday").await;
    create_gift(&app, &owner, event_id, "First").await;
    create_gift(&app, &owner, event_id, "Second").await;

    let uri = format!("/api/v1/gifts/event/{event_id}");
    let response = get_auth(app.clone(), &uri, &owner).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);

    let response = get_auth(app, &uri, &stranger).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Role boundaries
// ---------------------------------------------------------------------------

/// An editor share can create, update, and toggle gifts, but not delete them.
#[sqlx::test(migrations = "../../migrations")]
async fn test_editor_can_write_but_not_delete(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let (editor, _) = register_user(&app, "Editor", "editor@example.com").await;
    let event_id = create_event(&app, &owner, "Wedding").await;
    share_event(&app, &owner, event_id, "editor@example.com", "editor").await;

    let gift_id = create_gift(&app, &editor, event_id, "Toaster").await;

    let uri = format!("/api/v1/gifts/{gift_id}");
    let body = serde_json::json!({ "price": 45.0 });
    let response = put_json_auth(app.clone(), &uri, &editor, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let toggle_uri = format!("/api/v1/gifts/{gift_id}/toggle");
    let response = patch_auth(app.clone(), &toggle_uri, &editor).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(app, &uri, &editor).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// An admin share can delete gifts.
#[sqlx::test(migrations = "../../migrations")]
async fn test_admin_share_can_delete_gifts(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let (helper, _) = register_user(&app, "Helper", "helper@example.com").await;
    let event_id = create_event(&app, &owner, "Housewarming").await;
    share_event(&app, &owner, event_id, "helper@example.com", "admin").await;
    let gift_id = create_gift(&app, &owner, event_id, "Plant").await;

    let uri = format!("/api/v1/gifts/{gift_id}");
    let response = delete_auth(app, &uri, &helper).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// A viewer share cannot toggle gifts.
#[sqlx::test(migrations = "../../migrations")]
async fn test_viewer_cannot_toggle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let (viewer, _) = register_user(&app, "Viewer", "viewer@example.com").await;
    let event_id = create_event(&app, &owner, "Graduation").await;
    share_event(&app, &owner, event_id, "viewer@example.com", "viewer").await;
    let gift_id = create_gift(&app, &owner, event_id, "Pen").await;

    let uri = format!("/api/v1/gifts/{gift_id}/toggle");
    let response = patch_auth(app, &uri, &viewer).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Gift operations on an event the user cannot see yield 403; a missing
/// gift yields 404.
#[sqlx::test(migrations = "../../migrations")]
async fn test_gift_access_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let (stranger, _) = register_user(&app, "Stranger", "stranger@example.com").await;
    let event_id = create_event(&app, &owner, "Private").await;
    let gift_id = create_gift(&app, &owner, event_id, "Secret").await;

    let uri = format!("/api/v1/gifts/{gift_id}");
    let body = serde_json::json!({ "name": "Hijacked" });
    let response = put_json_auth(app.clone(), &uri, &stranger, body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app, "/api/v1/gifts/999999", &owner).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Toggle semantics
// ---------------------------------------------------------------------------

/// Completing a gift stamps the purchaser; un-completing clears both stamps,
/// so a double toggle does not restore the original purchaser fields.
#[sqlx::test(migrations = "../../migrations")]
async fn test_toggle_stamps_and_clears_purchaser(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner, _) = register_user(&app, "Owner", "owner@example.com").await;
    let (editor, editor_id) = register_user(&app, "Editor", "editor@example.com").await;
    let event_id = create_event(&app, &owner, "Christmas").await;
    share_event(&app, &owner, event_id, "editor@example.com", "editor").await;
    let gift_id = create_gift(&app, &owner, event_id, "Gloves").await;

    let uri = format!("/api/v1/gifts/{gift_id}/toggle");

    // The editor marks it done: their id and a timestamp are recorded.
    let response = patch_auth(app.clone(), &uri, &editor).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_done"], true);
    assert_eq!(json["data"]["purchased_by"], editor_id);
    assert!(json["data"]["purchased_at"].is_string());

    // The owner un-marks it: both purchaser fields are cleared.
    let response = patch_auth(app.clone(), &uri, &owner).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_done"], false);
    assert!(json["data"]["purchased_by"].is_null());
    assert!(json["data"]["purchased_at"].is_null());

    // Toggling again attributes the purchase to the new actor.
    let response = patch_auth(app, &uri, &owner).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_done"], true);
    assert_ne!(json["data"]["purchased_by"], editor_id);
}
