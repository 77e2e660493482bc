//! Handlers for the `/classes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::school_class::{CreateSchoolClass, SchoolClass, UpdateSchoolClass};
use campus_db::repositories::SchoolClassRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::YearParams;
use crate::state::AppState;

/// GET /api/v1/classes?year=
///
/// List classes, optionally narrowed to one academic year.
pub async fn list_classes(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<YearParams>,
) -> AppResult<Json<Vec<SchoolClass>>> {
    let classes = match params.year {
        Some(year_id) => SchoolClassRepo::list_by_year(&state.pool, year_id).await?,
        None => SchoolClassRepo::list(&state.pool).await?,
    };
    Ok(Json(classes))
}

/// GET /api/v1/classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<SchoolClass>> {
    let class = SchoolClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        }))?;
    Ok(Json(class))
}

/// POST /api/v1/classes
///
/// Create a class. Admin only. A duplicate (grade, section, year)
/// returns 409.
pub async fn create_class(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateSchoolClass>,
) -> AppResult<(StatusCode, Json<SchoolClass>)> {
    let class = SchoolClassRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// PUT /api/v1/classes/{id}
pub async fn update_class(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSchoolClass>,
) -> AppResult<Json<SchoolClass>> {
    let class = SchoolClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        }))?;
    Ok(Json(class))
}

/// DELETE /api/v1/classes/{id}
pub async fn delete_class(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SchoolClassRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Class",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
