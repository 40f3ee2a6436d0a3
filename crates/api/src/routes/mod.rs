pub mod analytics;
pub mod auth;
pub mod event;
pub mod gift;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            register (public)
/// /auth/login               login (public)
/// /auth/me                  current user
/// /auth/profile             update profile (PUT)
/// /auth/password            change password (PUT)
///
/// /events                   list, create
/// /events/{id}              get, update, delete
/// /events/{id}/share        share with a user by email (POST)
///
/// /gifts                    create (POST)
/// /gifts/event/{event_id}   list gifts for an event
/// /gifts/{id}               update, delete
/// /gifts/{id}/toggle        toggle done flag (PATCH)
///
/// /analytics/track          record collector event (public, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and profile routes.
        .nest("/auth", auth::router())
        // Event routes (also the share endpoint).
        .nest("/events", event::router())
        // Gift routes; permissions derive from the parent event.
        .nest("/gifts", gift::router())
        // Write-only usage collector.
        .nest("/analytics", analytics::router())
}
