//! Class (homeroom) model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Class row, unique per (grade_level, section, academic_year).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SchoolClass {
    pub id: DbId,
    pub name: String,
    pub grade_level: i32,
    pub section: String,
    pub academic_year_id: DbId,
    pub class_teacher_id: Option<DbId>,
    pub room_number: Option<String>,
    pub capacity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a class.
#[derive(Debug, Deserialize)]
pub struct CreateSchoolClass {
    pub name: String,
    pub grade_level: i32,
    pub section: String,
    pub academic_year_id: DbId,
    pub class_teacher_id: Option<DbId>,
    pub room_number: Option<String>,
    pub capacity: Option<i32>,
}

/// DTO for updating a class. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSchoolClass {
    pub name: Option<String>,
    pub class_teacher_id: Option<DbId>,
    pub room_number: Option<String>,
    pub capacity: Option<i32>,
}
