//! Route definitions for the `/announcements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

/// Routes mounted at `/announcements`.
///
/// ```text
/// GET /      live announcements for the viewer (public, role-filtered)
/// POST /     publish (admin)
/// GET /all   every announcement regardless of state (admin)
/// GET /{id}  get (visibility-checked), PUT update, DELETE remove (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(announcement::list_announcements).post(announcement::create_announcement),
        )
        .route("/all", get(announcement::list_all_announcements))
        .route(
            "/{id}",
            get(announcement::get_announcement)
                .put(announcement::update_announcement)
                .delete(announcement::delete_announcement),
        )
}
