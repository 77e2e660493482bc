//! Route definitions for the `/subjects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::subject;
use crate::state::AppState;

/// Routes mounted at `/subjects`.
///
/// ```text
/// GET /      list (requires auth), POST create (admin)
/// PUT /{id}  update, DELETE remove (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(subject::list_subjects).post(subject::create_subject))
        .route(
            "/{id}",
            put(subject::update_subject).delete(subject::delete_subject),
        )
}
