//! Handlers for the `/teachers` resource.
//!
//! The directory is public: anonymous visitors, parents and teachers get
//! the [`TeacherPublic`] projection of active profiles only. Admins get
//! the full row including staff-confidential fields.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::roles::Role;
use campus_core::types::DbId;
use campus_db::models::teacher::{CreateTeacher, Teacher, TeacherPublic, UpdateTeacher};
use campus_db::repositories::TeacherRepo;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeUser};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /teachers`. The storage DTO's `user_id` is
/// absent here; a teacher can only create their own profile, so the
/// requester's id is used.
#[derive(Debug, Deserialize)]
pub struct CreateTeacherRequest {
    pub first_name: String,
    pub last_name: String,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    #[serde(default)]
    pub experience_years: i32,
    pub date_joined: Option<NaiveDate>,
    pub bio: Option<String>,
    pub employee_code: String,
    pub phone: Option<String>,
    pub salary: Option<f64>,
}

/// GET /api/v1/teachers
///
/// List active teacher profiles. Public endpoint; the projection depends
/// on who is asking.
pub async fn list_teachers(
    State(state): State<AppState>,
    viewer: MaybeUser,
) -> AppResult<Response> {
    let teachers = TeacherRepo::list_active(&state.pool).await?;

    if viewer.is_admin() {
        return Ok(Json(teachers).into_response());
    }
    let public: Vec<TeacherPublic> = teachers.iter().map(TeacherPublic::from).collect();
    Ok(Json(public).into_response())
}

/// GET /api/v1/teachers/{id}
///
/// Fetch one teacher profile. Non-admins only see active profiles, and
/// only the public projection.
pub async fn get_teacher(
    State(state): State<AppState>,
    viewer: MaybeUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;

    if viewer.is_admin() {
        return Ok(Json(teacher).into_response());
    }

    // Deactivated profiles are invisible outside the admin console.
    if !teacher.is_active {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }));
    }

    Ok(Json(TeacherPublic::from(&teacher)).into_response())
}

/// POST /api/v1/teachers
///
/// Create the requester's own teacher profile. Only approved teacher
/// accounts can do this, and only once; a second attempt trips the
/// unique user_id constraint and returns 409.
pub async fn create_teacher(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTeacherRequest>,
) -> AppResult<(StatusCode, Json<Teacher>)> {
    if user.role != Role::Teacher {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only teacher accounts can create a teacher profile".into(),
        )));
    }

    let create = CreateTeacher {
        user_id: user.user_id,
        first_name: input.first_name,
        last_name: input.last_name,
        qualification: input.qualification,
        specialization: input.specialization,
        experience_years: input.experience_years,
        date_joined: input.date_joined,
        bio: input.bio,
        employee_code: input.employee_code,
        phone: input.phone,
        salary: input.salary,
    };

    let teacher = TeacherRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// PUT /api/v1/teachers/{id}
///
/// Update a teacher profile. Admins update any profile; a teacher only
/// their own.
pub async fn update_teacher(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeacher>,
) -> AppResult<Json<Teacher>> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;

    let is_own_profile = user.role == Role::Teacher && teacher.user_id == user.user_id;
    if user.role != Role::Admin && !is_own_profile {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only update your own teacher profile".into(),
        )));
    }

    let updated = TeacherRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/teachers/{id}
///
/// Soft-delete (deactivate) a teacher profile. Admin only. Deleting an
/// already deactivated profile is a no-op, not an error.
pub async fn delete_teacher(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TeacherRepo::deactivate(&state.pool, id).await? {
        return Ok(StatusCode::NO_CONTENT);
    }

    match TeacherRepo::find_by_id(&state.pool, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        })),
    }
}
