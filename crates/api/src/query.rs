//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use campus_core::types::DbId;
use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for list endpoints filterable by student and/or term
/// (`?student=&term=`). Used by results and fees.
#[derive(Debug, Deserialize)]
pub struct StudentTermParams {
    pub student: Option<DbId>,
    pub term: Option<DbId>,
}

/// Query parameters for the attendance listing (`?student=&date=`).
#[derive(Debug, Deserialize)]
pub struct AttendanceParams {
    pub student: Option<DbId>,
    pub date: Option<NaiveDate>,
}

/// Query parameter for the class listing (`?year=`).
#[derive(Debug, Deserialize)]
pub struct YearParams {
    pub year: Option<DbId>,
}

/// Query parameter for listings narrowed to one class (`?class=`).
#[derive(Debug, Deserialize)]
pub struct ClassParams {
    pub class: Option<DbId>,
}

/// Query parameter for the gallery listing (`?category=`).
#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: Option<DbId>,
}
