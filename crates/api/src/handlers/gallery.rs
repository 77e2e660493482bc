//! Handlers for the `/gallery` resource.
//!
//! The public site reads categories and published images without
//! signing in; unpublished images stay invisible outside the admin
//! `/all` listing. All writes are admin only.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::gallery::{
    CreateGalleryCategory, CreateGalleryImage, GalleryCategory, GalleryImage,
    UpdateGalleryCategory, UpdateGalleryImage,
};
use campus_db::repositories::{GalleryCategoryRepo, GalleryImageRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::CategoryParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/gallery/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<GalleryCategory>>> {
    let categories = GalleryCategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/v1/gallery/categories
///
/// Admin only. A duplicate name surfaces as 409 via
/// uq_gallery_categories_name.
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateGalleryCategory>,
) -> AppResult<(StatusCode, Json<GalleryCategory>)> {
    let category = GalleryCategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/v1/gallery/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryCategory>,
) -> AppResult<Json<GalleryCategory>> {
    let category = GalleryCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryCategory",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /api/v1/gallery/categories/{id}
///
/// Images in the category survive with their category cleared.
pub async fn delete_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GalleryCategoryRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryCategory",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// GET /api/v1/gallery
///
/// List published images, optionally narrowed by `?category=`.
pub async fn list_images(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> AppResult<Json<Vec<GalleryImage>>> {
    let images = GalleryImageRepo::list_published(&state.pool, params.category).await?;
    Ok(Json(images))
}

/// GET /api/v1/gallery/all
///
/// List every image regardless of publish state. Admin only.
pub async fn list_all_images(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<GalleryImage>>> {
    let images = GalleryImageRepo::list_all(&state.pool).await?;
    Ok(Json(images))
}

/// GET /api/v1/gallery/{id}
///
/// Fetch one published image. Unpublished images answer 404 for every
/// caller; the admin console uses `/all` instead.
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<GalleryImage>> {
    let image = GalleryImageRepo::find_published(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryImage",
            id,
        }))?;
    Ok(Json(image))
}

/// POST /api/v1/gallery
///
/// Register an image. Admin only; the uploader is recorded.
pub async fn create_image(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateGalleryImage>,
) -> AppResult<(StatusCode, Json<GalleryImage>)> {
    let image = GalleryImageRepo::create(&state.pool, &input, Some(admin.user_id)).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// PUT /api/v1/gallery/{id}
pub async fn update_image(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGalleryImage>,
) -> AppResult<Json<GalleryImage>> {
    let image = GalleryImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "GalleryImage",
            id,
        }))?;
    Ok(Json(image))
}

/// DELETE /api/v1/gallery/{id}
pub async fn delete_image(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GalleryImageRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "GalleryImage",
            id,
        }))
    }
}
