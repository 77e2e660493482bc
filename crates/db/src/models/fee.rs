//! Fee model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fee row. `status` is derived from the amounts on every write; client
/// input never sets it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Fee {
    pub id: DbId,
    pub student_id: DbId,
    pub term_id: DbId,
    pub amount: f64,
    pub amount_paid: f64,
    pub status: String,
    pub due_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a fee record.
#[derive(Debug, Deserialize)]
pub struct CreateFee {
    pub student_id: DbId,
    pub term_id: DbId,
    pub amount: f64,
    pub amount_paid: Option<f64>,
    pub due_date: NaiveDate,
    pub description: Option<String>,
}

/// DTO for updating a fee record. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateFee {
    pub amount: Option<f64>,
    pub amount_paid: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
}
