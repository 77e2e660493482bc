//! Teacher profile model and DTOs.

use campus_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full teacher row from the `teachers` table.
///
/// `employee_code`, `phone` and `salary` are staff-confidential; serve
/// [`TeacherPublic`] to anyone who is not an admin.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Teacher {
    pub id: DbId,
    pub user_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: i32,
    pub date_joined: Option<NaiveDate>,
    pub bio: Option<String>,
    pub employee_code: String,
    pub phone: Option<String>,
    pub salary: Option<f64>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a teacher profile.
#[derive(Debug, Clone, Serialize)]
pub struct TeacherPublic {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: i32,
    pub date_joined: Option<NaiveDate>,
    pub bio: Option<String>,
}

impl From<&Teacher> for TeacherPublic {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id,
            first_name: teacher.first_name.clone(),
            last_name: teacher.last_name.clone(),
            qualification: teacher.qualification.clone(),
            specialization: teacher.specialization.clone(),
            experience_years: teacher.experience_years,
            date_joined: teacher.date_joined,
            bio: teacher.bio.clone(),
        }
    }
}

/// DTO for creating a teacher profile.
#[derive(Debug, Deserialize)]
pub struct CreateTeacher {
    pub user_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    #[serde(default)]
    pub experience_years: i32,
    pub date_joined: Option<NaiveDate>,
    pub bio: Option<String>,
    pub employee_code: String,
    pub phone: Option<String>,
    pub salary: Option<f64>,
}

/// DTO for updating a teacher profile. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTeacher {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub date_joined: Option<NaiveDate>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub salary: Option<f64>,
}
