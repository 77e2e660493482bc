//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register                     register parent/teacher (public)
/// POST /login                        login (public)
/// POST /refresh                      refresh (public)
/// POST /logout                       logout (requires auth)
/// GET  /me                           current user profile (requires auth)
/// GET  /teachers/pending             unapproved teacher accounts (admin)
/// POST /teachers/{user_id}/approve   approve a teacher account (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/teachers/pending", get(auth::pending_teachers))
        .route("/teachers/{user_id}/approve", post(auth::approve_teacher))
}
