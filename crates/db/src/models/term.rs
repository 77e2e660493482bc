//! School term model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Term row. `term_number` is 1-3 within its academic year; at most one
/// term is current across all years.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Term {
    pub id: DbId,
    pub academic_year_id: DbId,
    pub term_number: i16,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Term joined with its academic year, for display strings and report
/// headers.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TermWithYear {
    pub id: DbId,
    pub academic_year_id: DbId,
    pub term_number: i16,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current: bool,
    pub year_label: String,
    pub year_start_date: NaiveDate,
}

/// DTO for creating a term.
#[derive(Debug, Deserialize)]
pub struct CreateTerm {
    pub academic_year_id: DbId,
    pub term_number: i16,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
