//! Route definitions for the `/public` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::public_info;
use crate::state::AppState;

/// Routes mounted at `/public`.
///
/// ```text
/// GET /school-info   school profile (public), PUT upsert (admin)
/// GET /news          published news (public), POST create (admin)
/// GET /news/{id}     one published post (public)
/// GET /stats         headline counters (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/school-info",
            get(public_info::get_school_info).put(public_info::upsert_school_info),
        )
        .route(
            "/news",
            get(public_info::list_news).post(public_info::create_news),
        )
        .route("/news/{id}", get(public_info::get_news))
        .route("/stats", get(public_info::school_stats))
}
