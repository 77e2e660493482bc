//! Repository for the `academic_years` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::academic_year::{AcademicYear, CreateAcademicYear};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, label, start_date, end_date, is_current, created_at, updated_at";

/// Provides CRUD operations for academic years.
pub struct AcademicYearRepo;

impl AcademicYearRepo {
    /// Insert a new academic year, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAcademicYear,
    ) -> Result<AcademicYear, sqlx::Error> {
        let query = format!(
            "INSERT INTO academic_years (label, start_date, end_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AcademicYear>(&query)
            .bind(&input.label)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find an academic year by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AcademicYear>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academic_years WHERE id = $1");
        sqlx::query_as::<_, AcademicYear>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the current academic year (if one is marked).
    pub async fn find_current(pool: &PgPool) -> Result<Option<AcademicYear>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academic_years WHERE is_current = true");
        sqlx::query_as::<_, AcademicYear>(&query)
            .fetch_optional(pool)
            .await
    }

    /// List all academic years, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AcademicYear>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM academic_years ORDER BY start_date DESC");
        sqlx::query_as::<_, AcademicYear>(&query)
            .fetch_all(pool)
            .await
    }

    /// Mark one year as current, un-marking any other. Uses a transaction
    /// to keep the single-current invariant.
    ///
    /// Returns `None` if `id` does not exist.
    pub async fn set_current(pool: &PgPool, id: DbId) -> Result<Option<AcademicYear>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE academic_years SET is_current = false, updated_at = NOW()
             WHERE is_current = true AND id <> $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE academic_years SET is_current = true, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, AcademicYear>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result)
    }
}
