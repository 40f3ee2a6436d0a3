//! Route definitions for the `/analytics` collector.

use axum::routing::post;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
///
/// ```text
/// POST /track  -> record one collector event (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/track", post(analytics::track))
}
