//! Route definitions for the `/classes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::school_class;
use crate::state::AppState;

/// Routes mounted at `/classes`.
///
/// ```text
/// GET /      list (?year=, requires auth), POST create (admin)
/// GET /{id}  get, PUT update, DELETE remove (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(school_class::list_classes).post(school_class::create_class),
        )
        .route(
            "/{id}",
            get(school_class::get_class)
                .put(school_class::update_class)
                .delete(school_class::delete_class),
        )
}
