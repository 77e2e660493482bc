//! Handlers for the `/public` resource.
//!
//! The landing-page surface: school profile, news, and headline
//! counters, all readable without signing in. The profile and news are
//! maintained by admins.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::public_info::{
    CreateNews, News, SchoolInfo, SchoolStats, UpsertSchoolInfo,
};
use campus_db::repositories::{
    NewsRepo, SchoolClassRepo, SchoolInfoRepo, StudentRepo, TeacherRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/public/school-info
///
/// The school profile. 404 until an admin first fills it in.
pub async fn get_school_info(State(state): State<AppState>) -> AppResult<Json<SchoolInfo>> {
    let info = SchoolInfoRepo::get(&state.pool).await?;
    Ok(Json(info))
}

/// PUT /api/v1/public/school-info
///
/// Create or replace the school profile. Admin only.
pub async fn upsert_school_info(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<UpsertSchoolInfo>,
) -> AppResult<Json<SchoolInfo>> {
    let info = SchoolInfoRepo::upsert(&state.pool, &input).await?;
    Ok(Json(info))
}

/// GET /api/v1/public/news
pub async fn list_news(State(state): State<AppState>) -> AppResult<Json<Vec<News>>> {
    let news = NewsRepo::list_published(&state.pool).await?;
    Ok(Json(news))
}

/// GET /api/v1/public/news/{id}
///
/// Unpublished posts answer 404 for every caller.
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<News>> {
    let news = NewsRepo::find_published(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "News", id }))?;
    Ok(Json(news))
}

/// POST /api/v1/public/news
///
/// Publish a news post. Admin only.
pub async fn create_news(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateNews>,
) -> AppResult<(StatusCode, Json<News>)> {
    let news = NewsRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// GET /api/v1/public/stats
///
/// Headline counters for the landing page: active students, active
/// teachers, and classes.
pub async fn school_stats(State(state): State<AppState>) -> AppResult<Json<SchoolStats>> {
    let stats = SchoolStats {
        total_students: StudentRepo::count_active(&state.pool).await?,
        total_teachers: TeacherRepo::count_active(&state.pool).await?,
        total_classes: SchoolClassRepo::count(&state.pool).await?,
    };
    Ok(Json(stats))
}
