//! Repository for the `attendance` table.

use campus_core::types::DbId;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::attendance::{Attendance, CreateAttendance, UpdateAttendance};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, class_id, date, status, remarks, marked_by, \
                        created_at, updated_at";

/// Provides CRUD operations for attendance records.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Insert a new attendance record, returning the created row. A
    /// missing status falls back to present.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAttendance,
        marked_by: Option<DbId>,
    ) -> Result<Attendance, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (student_id, class_id, date, status, remarks, marked_by)
             VALUES ($1, $2, $3, COALESCE($4, 'P'), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(input.student_id)
            .bind(input.class_id)
            .bind(input.date)
            .bind(&input.status)
            .bind(&input.remarks)
            .bind(marked_by)
            .fetch_one(pool)
            .await
    }

    /// Find an attendance record by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attendance WHERE id = $1");
        sqlx::query_as::<_, Attendance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List attendance, optionally narrowed by student and/or date.
    pub async fn list_filtered(
        pool: &PgPool,
        student_id: Option<DbId>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance
             WHERE ($1::bigint IS NULL OR student_id = $1)
               AND ($2::date IS NULL OR date = $2)
             ORDER BY date DESC, student_id"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(student_id)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// List attendance restricted to one parent's children, with the same
    /// optional filters as [`Self::list_filtered`].
    pub async fn list_filtered_for_parent(
        pool: &PgPool,
        parent_id: DbId,
        student_id: Option<DbId>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        let query = format!(
            "SELECT {columns} FROM attendance a
             JOIN students s ON s.id = a.student_id
             WHERE s.parent_id = $1
               AND ($2::bigint IS NULL OR a.student_id = $2)
               AND ($3::date IS NULL OR a.date = $3)
             ORDER BY a.date DESC, a.student_id",
            columns = qualified_columns()
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(parent_id)
            .bind(student_id)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// Update an attendance record. Only non-`None` fields in `input` are
    /// applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAttendance,
    ) -> Result<Option<Attendance>, sqlx::Error> {
        let query = format!(
            "UPDATE attendance SET
                status = COALESCE($2, status),
                remarks = COALESCE($3, remarks),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Attendance>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.remarks)
            .fetch_optional(pool)
            .await
    }
}

/// `COLUMNS` with an `a.` qualifier for joined queries.
fn qualified_columns() -> String {
    COLUMNS
        .split(", ")
        .map(|c| format!("a.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
