//! Route definitions for the `/events` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`. All require authentication.
///
/// ```text
/// GET    /            -> list owned events (filter/search/sort)
/// POST   /            -> create event
/// GET    /{id}        -> event detail with share list
/// PUT    /{id}        -> update event (owner only)
/// DELETE /{id}        -> delete event and its gifts (owner only)
/// POST   /{id}/share  -> share event with a user by email (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route(
            "/{id}",
            get(event::get_by_id)
                .put(event::update)
                .delete(event::delete),
        )
        .route("/{id}/share", post(event::share))
}
