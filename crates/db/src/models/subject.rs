//! Subject model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Subject row. `code` is the unique short identifier (e.g. `"MATH5"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub grade_level: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a subject.
#[derive(Debug, Deserialize)]
pub struct CreateSubject {
    pub name: String,
    pub code: String,
    pub grade_level: i32,
    pub description: Option<String>,
}

/// DTO for updating a subject. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSubject {
    pub name: Option<String>,
    pub grade_level: Option<i32>,
    pub description: Option<String>,
}
