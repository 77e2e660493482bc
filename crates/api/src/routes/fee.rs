//! Route definitions for the `/fees` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::fee;
use crate::state::AppState;

/// Routes mounted at `/fees`.
///
/// ```text
/// GET /      list (?student=, ?term=, role-scoped), POST create (admin)
/// PUT /{id}  amend amounts; status is re-derived (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fee::list_fees).post(fee::create_fee))
        .route("/{id}", put(fee::update_fee))
}
