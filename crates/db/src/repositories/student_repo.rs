//! Repository for the `students` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_code, first_name, last_name, date_of_birth, gender, \
                        admission_date, parent_id, current_class_id, phone, address, \
                        emergency_contact_name, emergency_contact_phone, is_active, \
                        created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (student_code, first_name, last_name, date_of_birth,
                                   gender, admission_date, parent_id, current_class_id,
                                   phone, address, emergency_contact_name, emergency_contact_phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.student_code)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(input.admission_date)
            .bind(input.parent_id)
            .bind(input.current_class_id)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .fetch_one(pool)
            .await
    }

    /// Find a student by internal ID (active or not).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active students ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE is_active = true
             ORDER BY first_name, last_name"
        );
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// List a parent's active children.
    pub async fn list_by_parent(pool: &PgPool, parent_id: DbId) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE parent_id = $1 AND is_active = true
             ORDER BY first_name, last_name"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Count active students.
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM students WHERE is_active = true")
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                date_of_birth = COALESCE($4, date_of_birth),
                gender = COALESCE($5, gender),
                admission_date = COALESCE($6, admission_date),
                current_class_id = COALESCE($7, current_class_id),
                phone = COALESCE($8, phone),
                address = COALESCE($9, address),
                emergency_contact_name = COALESCE($10, emergency_contact_name),
                emergency_contact_phone = COALESCE($11, emergency_contact_phone),
                is_active = COALESCE($12, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(input.admission_date)
            .bind(input.current_class_id)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a student. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET is_active = false, updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
