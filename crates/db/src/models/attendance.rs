//! Attendance model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Attendance row: one student's mark for one date. Unique per
/// (student, date); `status` is a single-letter code (`P`, `A`, `L`, `E`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub student_id: DbId,
    pub class_id: DbId,
    pub date: NaiveDate,
    pub status: String,
    pub remarks: Option<String>,
    pub marked_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an attendance record.
#[derive(Debug, Deserialize)]
pub struct CreateAttendance {
    pub student_id: DbId,
    pub class_id: DbId,
    pub date: NaiveDate,
    pub status: Option<String>,
    pub remarks: Option<String>,
}

/// DTO for updating an attendance record. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAttendance {
    pub status: Option<String>,
    pub remarks: Option<String>,
}
