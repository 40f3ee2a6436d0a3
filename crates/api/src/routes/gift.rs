//! Route definitions for the `/gifts` resource.

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::gift;
use crate::state::AppState;

/// Routes mounted at `/gifts`. All require authentication; the effective
/// permission comes from the parent event's grants.
///
/// ```text
/// POST   /                   -> create gift (editor+)
/// GET    /event/{event_id}   -> list gifts for an event (viewer+)
/// PUT    /{id}               -> update gift (editor+)
/// PATCH  /{id}/toggle        -> toggle done flag (editor+)
/// DELETE /{id}               -> delete gift (admin share or owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(gift::create))
        .route("/event/{event_id}", get(gift::list_by_event))
        .route("/{id}", put(gift::update).delete(gift::delete))
        .route("/{id}/toggle", patch(gift::toggle))
}
