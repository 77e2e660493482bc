//! Handlers for the `/attendance` resource.
//!
//! Marking and amending attendance is staff-only; listing is
//! role-scoped with parents narrowed to their own children.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::attendance::AttendanceStatus;
use campus_core::error::CoreError;
use campus_core::roles::Role;
use campus_core::types::DbId;
use campus_db::models::attendance::{Attendance, CreateAttendance, UpdateAttendance};
use campus_db::repositories::{AttendanceRepo, TeacherRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::query::AttendanceParams;
use crate::state::AppState;

/// GET /api/v1/attendance
///
/// List attendance records, optionally filtered by `?student=` and
/// `?date=`. Parents only receive rows for their own children.
pub async fn list_attendance(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<AttendanceParams>,
) -> AppResult<Json<Vec<Attendance>>> {
    let records = match user.role {
        Role::Admin | Role::Teacher => {
            AttendanceRepo::list_filtered(&state.pool, params.student, params.date).await?
        }
        Role::Parent => {
            AttendanceRepo::list_filtered_for_parent(
                &state.pool,
                user.user_id,
                params.student,
                params.date,
            )
            .await?
        }
    };
    Ok(Json(records))
}

/// POST /api/v1/attendance
///
/// Mark one student's attendance for one date. Teachers and admins
/// only; a teacher's profile is stamped as `marked_by`. A second mark
/// for the same (student, date) surfaces as 409 via
/// uq_attendance_student_date.
pub async fn create_attendance(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Json(input): Json<CreateAttendance>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    if let Some(status) = &input.status {
        AttendanceStatus::parse(status)?;
    }

    let marked_by = match user.role {
        Role::Teacher => TeacherRepo::find_by_user_id(&state.pool, user.user_id)
            .await?
            .map(|t| t.id),
        _ => None,
    };

    let record = AttendanceRepo::create(&state.pool, &input, marked_by).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/v1/attendance/{id}
///
/// Amend an attendance record's status or remarks. Teachers and admins
/// only.
pub async fn update_attendance(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttendance>,
) -> AppResult<Json<Attendance>> {
    if let Some(status) = &input.status {
        AttendanceStatus::parse(status)?;
    }

    let record = AttendanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attendance",
            id,
        }))?;
    Ok(Json(record))
}
