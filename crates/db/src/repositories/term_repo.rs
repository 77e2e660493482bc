//! Repository for the `terms` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::term::{CreateTerm, Term, TermWithYear};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, academic_year_id, term_number, start_date, end_date, is_current, created_at, updated_at";

/// Joined column list for term-with-year queries.
const JOINED_COLUMNS: &str = "t.id, t.academic_year_id, t.term_number, t.start_date, t.end_date, \
                               t.is_current, y.label AS year_label, y.start_date AS year_start_date";

/// Provides CRUD operations for terms.
pub struct TermRepo;

impl TermRepo {
    /// Insert a new term, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTerm) -> Result<Term, sqlx::Error> {
        let query = format!(
            "INSERT INTO terms (academic_year_id, term_number, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Term>(&query)
            .bind(input.academic_year_id)
            .bind(input.term_number)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a term by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Term>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM terms WHERE id = $1");
        sqlx::query_as::<_, Term>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a term joined with its academic year.
    pub async fn find_with_year(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TermWithYear>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM terms t
             JOIN academic_years y ON y.id = t.academic_year_id
             WHERE t.id = $1"
        );
        sqlx::query_as::<_, TermWithYear>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all terms ordered by year start then term number.
    pub async fn list(pool: &PgPool) -> Result<Vec<TermWithYear>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM terms t
             JOIN academic_years y ON y.id = t.academic_year_id
             ORDER BY y.start_date, t.term_number"
        );
        sqlx::query_as::<_, TermWithYear>(&query)
            .fetch_all(pool)
            .await
    }

    /// Mark one term as current, un-marking any other term of any year.
    /// Uses a transaction to keep the single-current invariant.
    ///
    /// Returns `None` if `id` does not exist.
    pub async fn set_current(pool: &PgPool, id: DbId) -> Result<Option<Term>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE terms SET is_current = false, updated_at = NOW()
             WHERE is_current = true AND id <> $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE terms SET is_current = true, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Term>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result)
    }
}
