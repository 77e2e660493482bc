//! Repository for the `classes` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::school_class::{CreateSchoolClass, SchoolClass, UpdateSchoolClass};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, grade_level, section, academic_year_id, class_teacher_id, \
                        room_number, capacity, created_at, updated_at";

/// Provides CRUD operations for classes.
pub struct SchoolClassRepo;

impl SchoolClassRepo {
    /// Insert a new class, returning the created row. A missing capacity
    /// falls back to the table default.
    pub async fn create(pool: &PgPool, input: &CreateSchoolClass) -> Result<SchoolClass, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (name, grade_level, section, academic_year_id,
                                  class_teacher_id, room_number, capacity)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 30))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SchoolClass>(&query)
            .bind(&input.name)
            .bind(input.grade_level)
            .bind(&input.section)
            .bind(input.academic_year_id)
            .bind(input.class_teacher_id)
            .bind(&input.room_number)
            .bind(input.capacity)
            .fetch_one(pool)
            .await
    }

    /// Find a class by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SchoolClass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, SchoolClass>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all classes ordered by grade then section.
    pub async fn list(pool: &PgPool) -> Result<Vec<SchoolClass>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY grade_level, section");
        sqlx::query_as::<_, SchoolClass>(&query).fetch_all(pool).await
    }

    /// List classes for one academic year.
    pub async fn list_by_year(
        pool: &PgPool,
        academic_year_id: DbId,
    ) -> Result<Vec<SchoolClass>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM classes
             WHERE academic_year_id = $1
             ORDER BY grade_level, section"
        );
        sqlx::query_as::<_, SchoolClass>(&query)
            .bind(academic_year_id)
            .fetch_all(pool)
            .await
    }

    /// Count all classes.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM classes")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a class. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchoolClass,
    ) -> Result<Option<SchoolClass>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET
                name = COALESCE($2, name),
                class_teacher_id = COALESCE($3, class_teacher_id),
                room_number = COALESCE($4, room_number),
                capacity = COALESCE($5, capacity),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SchoolClass>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.class_teacher_id)
            .bind(&input.room_number)
            .bind(input.capacity)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
