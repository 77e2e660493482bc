//! Route definitions for the `/teachers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::teacher;
use crate::state::AppState;

/// Routes mounted at `/teachers`.
///
/// ```text
/// GET  /      public directory listing, POST create own profile (teacher)
/// GET  /{id}  get, PUT update (admin or own), DELETE deactivate (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(teacher::list_teachers).post(teacher::create_teacher),
        )
        .route(
            "/{id}",
            get(teacher::get_teacher)
                .put(teacher::update_teacher)
                .delete(teacher::delete_teacher),
        )
}
