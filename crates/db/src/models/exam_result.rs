//! Exam result model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Result row: one student's marks in one subject for one term.
/// Unique per (student, subject, term).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExamResult {
    pub id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub term_id: DbId,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: Option<String>,
    pub remarks: Option<String>,
    pub entered_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a result. `grade` is filled from the marks when the
/// client does not supply one.
#[derive(Debug, Deserialize)]
pub struct CreateExamResult {
    pub student_id: DbId,
    pub subject_id: DbId,
    pub term_id: DbId,
    pub marks_obtained: f64,
    pub total_marks: Option<f64>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}

/// DTO for updating a result. All fields are optional; when marks change
/// and no explicit grade is sent, the grade is recomputed.
#[derive(Debug, Deserialize)]
pub struct UpdateExamResult {
    pub marks_obtained: Option<f64>,
    pub total_marks: Option<f64>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}

/// Joined row for summaries and report cards: a result with its subject
/// name resolved.
#[derive(Debug, Clone, FromRow)]
pub struct ResultLine {
    pub subject_name: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}

/// Joined row for the trend query: a result line tagged with its term
/// and year, ordered by (year start, term number) in SQL.
#[derive(Debug, Clone, FromRow)]
pub struct TrendLine {
    pub term_id: DbId,
    pub term_number: i16,
    pub year_label: String,
    pub subject_name: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}
