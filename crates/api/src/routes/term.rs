//! Route definitions for the `/terms` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::term;
use crate::state::AppState;

/// Routes mounted at `/terms`.
///
/// ```text
/// GET /                     list with year labels (requires auth), POST create (admin)
/// PUT /{id}/set-current     mark as the current term (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(term::list_terms).post(term::create_term))
        .route("/{id}/set-current", put(term::set_current_term))
}
