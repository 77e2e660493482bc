//! Handlers for the `/students` resource.
//!
//! Listing is role-scoped: admins and teachers see every active student,
//! parents only their own children. Detail endpoints distinguish 403
//! (exists, not yours) from 404 (no such student).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::roles::Role;
use campus_core::types::DbId;
use campus_db::models::student::{CreateStudent, Student, UpdateStudent};
use campus_db::repositories::{StudentRepo, UserRepo};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /students`. Unlike the storage DTO, the parent
/// is optional here: parents never send it (the requester becomes the
/// parent), admins must.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub admission_date: NaiveDate,
    pub parent_id: Option<DbId>,
    pub current_class_id: Option<DbId>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

/// GET /api/v1/students
///
/// List active students visible to the requester.
pub async fn list_students(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Student>>> {
    let students = match user.role {
        Role::Admin | Role::Teacher => StudentRepo::list_active(&state.pool).await?,
        Role::Parent => StudentRepo::list_by_parent(&state.pool, user.user_id).await?,
    };
    Ok(Json(students))
}

/// GET /api/v1/students/my-children
///
/// List the requester's own active children. Empty for accounts no
/// student points at (admins, teachers).
pub async fn my_children(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Student>>> {
    let children = StudentRepo::list_by_parent(&state.pool, user.user_id).await?;
    Ok(Json(children))
}

/// GET /api/v1/students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;

    if user.role == Role::Parent && student.parent_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view your own children".into(),
        )));
    }

    Ok(Json(student))
}

/// POST /api/v1/students
///
/// Create a student record. Admins create for any parent account;
/// parents create for themselves. Teachers cannot create students.
pub async fn create_student(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let parent_id = match user.role {
        Role::Teacher => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Teachers cannot create student records".into(),
            )));
        }
        Role::Parent => user.user_id,
        Role::Admin => {
            let parent_id = input.parent_id.ok_or_else(|| {
                AppError::Core(CoreError::Validation("parent_id is required".into()))
            })?;
            let parent = UserRepo::find_by_id(&state.pool, parent_id).await?;
            match parent {
                Some(ref u) if u.role == Role::Parent.as_str() => parent_id,
                _ => {
                    return Err(AppError::Core(CoreError::Validation(
                        "parent_id must reference a parent account".into(),
                    )));
                }
            }
        }
    };

    let create = CreateStudent {
        student_code: input.student_code,
        first_name: input.first_name,
        last_name: input.last_name,
        date_of_birth: input.date_of_birth,
        gender: input.gender,
        admission_date: input.admission_date,
        parent_id,
        current_class_id: input.current_class_id,
        phone: input.phone,
        address: input.address,
        emergency_contact_name: input.emergency_contact_name,
        emergency_contact_phone: input.emergency_contact_phone,
    };

    // Duplicate student_code surfaces as 409 via uq_students_student_code.
    let student = StudentRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/v1/students/{id}
///
/// Update a student. Admins update any student; parents only their own
/// children, and cannot toggle `is_active` (deactivation is the admin's
/// delete).
pub async fn update_student(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;

    match user.role {
        Role::Admin => {}
        Role::Parent if student.parent_id == user.user_id => {
            input.is_active = None;
        }
        Role::Parent => {
            return Err(AppError::Core(CoreError::Forbidden(
                "You can only update your own children".into(),
            )));
        }
        Role::Teacher => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only admins or the student's parent can update student records".into(),
            )));
        }
    }

    let updated = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;

    Ok(Json(updated))
}

/// DELETE /api/v1/students/{id}
///
/// Soft-delete (deactivate) a student. Admin only. Deleting an already
/// deactivated student is a no-op, not an error.
pub async fn delete_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StudentRepo::deactivate(&state.pool, id).await? {
        return Ok(StatusCode::NO_CONTENT);
    }

    // Not deactivated: either already inactive (fine) or missing (404).
    match StudentRepo::find_by_id(&state.pool, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        })),
    }
}
