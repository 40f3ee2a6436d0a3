//! Route definitions for the `/auth` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register  -> register (public)
/// POST /login     -> login (public)
/// GET  /me        -> current user (requires auth)
/// PUT  /profile   -> update profile (requires auth)
/// PUT  /password  -> change password (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
        .route("/profile", put(auth::update_profile))
        .route("/password", put(auth::change_password))
}
