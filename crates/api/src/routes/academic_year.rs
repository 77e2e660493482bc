//! Route definitions for the `/academic-years` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::academic_year;
use crate::state::AppState;

/// Routes mounted at `/academic-years`.
///
/// ```text
/// GET /                     list (requires auth), POST create (admin)
/// PUT /{id}/set-current     mark as the current year (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(academic_year::list_academic_years).post(academic_year::create_academic_year),
        )
        .route("/{id}/set-current", put(academic_year::set_current_year))
}
