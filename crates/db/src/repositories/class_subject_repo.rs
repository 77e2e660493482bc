//! Repository for the `class_subjects` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::class_subject::{ClassSubject, CreateClassSubject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, class_id, subject_id, teacher_id, created_at, updated_at";

/// Provides CRUD operations for class-subject assignments.
pub struct ClassSubjectRepo;

impl ClassSubjectRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClassSubject,
    ) -> Result<ClassSubject, sqlx::Error> {
        let query = format!(
            "INSERT INTO class_subjects (class_id, subject_id, teacher_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClassSubject>(&query)
            .bind(input.class_id)
            .bind(input.subject_id)
            .bind(input.teacher_id)
            .fetch_one(pool)
            .await
    }

    /// List all assignments.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClassSubject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM class_subjects ORDER BY class_id, subject_id");
        sqlx::query_as::<_, ClassSubject>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the assignments for one class.
    pub async fn list_by_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Vec<ClassSubject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM class_subjects
             WHERE class_id = $1
             ORDER BY subject_id"
        );
        sqlx::query_as::<_, ClassSubject>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }
}
