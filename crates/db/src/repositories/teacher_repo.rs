//! Repository for the `teachers` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::teacher::{CreateTeacher, Teacher, UpdateTeacher};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, first_name, last_name, qualification, specialization, \
                        experience_years, date_joined, bio, employee_code, phone, salary, \
                        is_active, created_at, updated_at";

/// Provides CRUD operations for teacher profiles.
pub struct TeacherRepo;

impl TeacherRepo {
    /// Insert a new teacher profile, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeacher) -> Result<Teacher, sqlx::Error> {
        let query = format!(
            "INSERT INTO teachers (user_id, first_name, last_name, qualification,
                                   specialization, experience_years, date_joined, bio,
                                   employee_code, phone, salary)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(input.user_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.qualification)
            .bind(&input.specialization)
            .bind(input.experience_years)
            .bind(input.date_joined)
            .bind(&input.bio)
            .bind(&input.employee_code)
            .bind(&input.phone)
            .bind(input.salary)
            .fetch_one(pool)
            .await
    }

    /// Find a teacher profile by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE id = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a teacher profile by its owning user account.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE user_id = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List active teacher profiles ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teachers
             WHERE is_active = true
             ORDER BY first_name, last_name"
        );
        sqlx::query_as::<_, Teacher>(&query).fetch_all(pool).await
    }

    /// Count active teacher profiles.
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM teachers WHERE is_active = true")
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Update a teacher profile. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeacher,
    ) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!(
            "UPDATE teachers SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                qualification = COALESCE($4, qualification),
                specialization = COALESCE($5, specialization),
                experience_years = COALESCE($6, experience_years),
                date_joined = COALESCE($7, date_joined),
                bio = COALESCE($8, bio),
                phone = COALESCE($9, phone),
                salary = COALESCE($10, salary),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.qualification)
            .bind(&input.specialization)
            .bind(input.experience_years)
            .bind(input.date_joined)
            .bind(&input.bio)
            .bind(&input.phone)
            .bind(input.salary)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a teacher profile. Returns `true` if the row was
    /// updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE teachers SET is_active = false, updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
