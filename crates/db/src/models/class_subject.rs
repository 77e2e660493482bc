//! Class-subject assignment model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Assignment of a subject (and optionally a teacher) to a class.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassSubject {
    pub id: DbId,
    pub class_id: DbId,
    pub subject_id: DbId,
    pub teacher_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a class-subject assignment.
#[derive(Debug, Deserialize)]
pub struct CreateClassSubject {
    pub class_id: DbId,
    pub subject_id: DbId,
    pub teacher_id: Option<DbId>,
}
