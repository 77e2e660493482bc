//! Route definitions for the `/attendance` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// GET /      list (?student=, ?date=, role-scoped), POST mark (staff)
/// PUT /{id}  amend status or remarks (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(attendance::list_attendance).post(attendance::create_attendance),
        )
        .route("/{id}", put(attendance::update_attendance))
}
