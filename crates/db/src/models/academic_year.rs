//! Academic year model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Academic year row, e.g. label `"2025-2026"`. At most one row has
/// `is_current = true`; the repository enforces this transactionally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AcademicYear {
    pub id: DbId,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an academic year.
#[derive(Debug, Deserialize)]
pub struct CreateAcademicYear {
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
