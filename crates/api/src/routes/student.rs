//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /              list (role-scoped), POST create (admin/parent)
/// GET    /my-children   requester's own children
/// GET    /{id}          get, PUT update, DELETE deactivate (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(student::list_students).post(student::create_student),
        )
        .route("/my-children", get(student::my_children))
        .route(
            "/{id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
}
