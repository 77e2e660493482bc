//! Route definitions for the `/results` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::result;
use crate::state::AppState;

/// Routes mounted at `/results`.
///
/// Static segments (`summary`, `trend`, `report-card`) are registered
/// alongside `/{id}`; Axum routes literal paths before the capture.
///
/// ```text
/// GET /                                   list (?student=, ?term=, role-scoped)
/// POST /                                  record a result (staff)
/// GET /{id}                               get, PUT update (staff), DELETE remove (admin)
/// GET /summary/{student_id}/{term_id}     per-term aggregate
/// GET /trend/{student_id}                 per-term aggregates across years
/// GET /report-card/{student_id}/{term_id} downloadable HTML report card
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(result::list_results).post(result::create_result))
        .route(
            "/summary/{student_id}/{term_id}",
            get(result::result_summary),
        )
        .route("/trend/{student_id}", get(result::result_trend))
        .route(
            "/report-card/{student_id}/{term_id}",
            get(result::report_card),
        )
        .route(
            "/{id}",
            get(result::get_result)
                .put(result::update_result)
                .delete(result::delete_result),
        )
}
