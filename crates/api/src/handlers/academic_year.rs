//! Handlers for the `/academic-years` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::academic_year::{AcademicYear, CreateAcademicYear};
use campus_db::repositories::AcademicYearRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// GET /api/v1/academic-years
///
/// List all academic years, most recent first.
pub async fn list_academic_years(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<AcademicYear>>> {
    let years = AcademicYearRepo::list(&state.pool).await?;
    Ok(Json(years))
}

/// POST /api/v1/academic-years
///
/// Create an academic year. Admin only. Duplicate labels return 409.
pub async fn create_academic_year(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateAcademicYear>,
) -> AppResult<(StatusCode, Json<AcademicYear>)> {
    let year = AcademicYearRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(year)))
}

/// PUT /api/v1/academic-years/{id}/set-current
///
/// Mark one academic year as current, clearing the flag everywhere else
/// in the same transaction.
pub async fn set_current_year(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<AcademicYear>> {
    let year = AcademicYearRepo::set_current(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AcademicYear",
            id,
        }))?;
    Ok(Json(year))
}
