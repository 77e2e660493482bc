//! Route definitions for the `/gallery` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// GET /                  published images (?category=, public)
/// POST /                 register image (admin)
/// GET /all               every image regardless of state (admin)
/// GET /categories        list categories (public), POST create (admin)
/// PUT /categories/{id}   update, DELETE remove (admin)
/// GET /{id}              get published image, PUT update, DELETE remove (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list_images).post(gallery::create_image))
        .route("/all", get(gallery::list_all_images))
        .route(
            "/categories",
            get(gallery::list_categories).post(gallery::create_category),
        )
        .route(
            "/categories/{id}",
            put(gallery::update_category).delete(gallery::delete_category),
        )
        .route(
            "/{id}",
            get(gallery::get_image)
                .put(gallery::update_image)
                .delete(gallery::delete_image),
        )
}
