//! Route definitions for the `/class-subjects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::class_subject;
use crate::state::AppState;

/// Routes mounted at `/class-subjects`.
///
/// ```text
/// GET / list assignments (?class=, requires auth), POST assign (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(class_subject::list_class_subjects).post(class_subject::create_class_subject),
    )
}
