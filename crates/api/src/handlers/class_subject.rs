//! Handlers for the `/class-subjects` resource (subject-to-class
//! assignments).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_db::models::class_subject::{ClassSubject, CreateClassSubject};
use campus_db::repositories::ClassSubjectRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::ClassParams;
use crate::state::AppState;

/// GET /api/v1/class-subjects?class=
///
/// List assignments, optionally narrowed to one class.
pub async fn list_class_subjects(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<ClassParams>,
) -> AppResult<Json<Vec<ClassSubject>>> {
    let assignments = match params.class {
        Some(class_id) => ClassSubjectRepo::list_by_class(&state.pool, class_id).await?,
        None => ClassSubjectRepo::list(&state.pool).await?,
    };
    Ok(Json(assignments))
}

/// POST /api/v1/class-subjects
///
/// Assign a subject (and optionally a teacher) to a class. Admin only.
/// A duplicate (class, subject) pair returns 409; a dangling class,
/// subject or teacher id returns 400.
pub async fn create_class_subject(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateClassSubject>,
) -> AppResult<(StatusCode, Json<ClassSubject>)> {
    let assignment = ClassSubjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}
