//! Repository for the `fees` table.

use campus_core::fees::FeeStatus;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::fee::{CreateFee, Fee, UpdateFee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, term_id, amount, amount_paid, status, due_date, \
                        description, created_at, updated_at";

/// Provides CRUD operations for fee records.
///
/// The stored `status` is derived from `(amount, amount_paid)` on every
/// write; it is never taken from the caller.
pub struct FeeRepo;

impl FeeRepo {
    /// Insert a new fee record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFee) -> Result<Fee, sqlx::Error> {
        let amount_paid = input.amount_paid.unwrap_or(0.0);
        let status = FeeStatus::derive(input.amount, amount_paid);

        let query = format!(
            "INSERT INTO fees (student_id, term_id, amount, amount_paid, status, due_date, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fee>(&query)
            .bind(input.student_id)
            .bind(input.term_id)
            .bind(input.amount)
            .bind(amount_paid)
            .bind(status.as_str())
            .bind(input.due_date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a fee record by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fees WHERE id = $1");
        sqlx::query_as::<_, Fee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List fees, optionally narrowed by student and/or term.
    pub async fn list_filtered(
        pool: &PgPool,
        student_id: Option<DbId>,
        term_id: Option<DbId>,
    ) -> Result<Vec<Fee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fees
             WHERE ($1::bigint IS NULL OR student_id = $1)
               AND ($2::bigint IS NULL OR term_id = $2)
             ORDER BY due_date DESC"
        );
        sqlx::query_as::<_, Fee>(&query)
            .bind(student_id)
            .bind(term_id)
            .fetch_all(pool)
            .await
    }

    /// List fees restricted to one parent's children, with the same
    /// optional filters as [`Self::list_filtered`].
    pub async fn list_filtered_for_parent(
        pool: &PgPool,
        parent_id: DbId,
        student_id: Option<DbId>,
        term_id: Option<DbId>,
    ) -> Result<Vec<Fee>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM fees f
             JOIN students s ON s.id = f.student_id
             WHERE s.parent_id = $1
               AND ($2::bigint IS NULL OR f.student_id = $2)
               AND ($3::bigint IS NULL OR f.term_id = $3)
             ORDER BY f.due_date DESC",
            columns = qualified_columns()
        );
        sqlx::query_as::<_, Fee>(&query)
            .bind(parent_id)
            .bind(student_id)
            .bind(term_id)
            .fetch_all(pool)
            .await
    }

    /// Update a fee record, re-deriving the status from the merged
    /// amounts. Runs in a transaction so the read-merge-write is atomic.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFee,
    ) -> Result<Option<Fee>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM fees WHERE id = $1 FOR UPDATE");
        let existing = sqlx::query_as::<_, Fee>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let amount = input.amount.unwrap_or(existing.amount);
        let amount_paid = input.amount_paid.unwrap_or(existing.amount_paid);
        let status = FeeStatus::derive(amount, amount_paid);
        let due_date = input.due_date.unwrap_or(existing.due_date);
        let description = input.description.clone().or(existing.description);

        let update = format!(
            "UPDATE fees SET
                amount = $2,
                amount_paid = $3,
                status = $4,
                due_date = $5,
                description = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Fee>(&update)
            .bind(id)
            .bind(amount)
            .bind(amount_paid)
            .bind(status.as_str())
            .bind(due_date)
            .bind(description)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }
}

/// `COLUMNS` with an `f.` qualifier for joined queries.
fn qualified_columns() -> String {
    COLUMNS
        .split(", ")
        .map(|c| format!("f.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
