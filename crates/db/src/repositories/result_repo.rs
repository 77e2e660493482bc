//! Repository for the `results` table.

use campus_core::grading;
use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::exam_result::{
    CreateExamResult, ExamResult, ResultLine, TrendLine, UpdateExamResult,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, subject_id, term_id, marks_obtained, total_marks, \
                        grade, remarks, entered_by, created_at, updated_at";

/// Provides CRUD operations for exam results.
///
/// Writes keep the stored `grade` consistent with the marks: a missing
/// grade is computed from `marks_obtained / total_marks` on insert, and
/// recomputed on update when the marks change without an explicit grade.
pub struct ResultRepo;

impl ResultRepo {
    /// Insert a new result, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExamResult,
        entered_by: Option<DbId>,
    ) -> Result<ExamResult, sqlx::Error> {
        let total_marks = input.total_marks.unwrap_or(100.0);
        let grade = input.grade.clone().or_else(|| {
            grading::grade_for(input.marks_obtained, total_marks).map(|g| g.as_str().to_string())
        });

        let query = format!(
            "INSERT INTO results (student_id, subject_id, term_id, marks_obtained,
                                  total_marks, grade, remarks, entered_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExamResult>(&query)
            .bind(input.student_id)
            .bind(input.subject_id)
            .bind(input.term_id)
            .bind(input.marks_obtained)
            .bind(total_marks)
            .bind(grade)
            .bind(&input.remarks)
            .bind(entered_by)
            .fetch_one(pool)
            .await
    }

    /// Find a result by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ExamResult>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM results WHERE id = $1");
        sqlx::query_as::<_, ExamResult>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List results, optionally narrowed by student and/or term.
    pub async fn list_filtered(
        pool: &PgPool,
        student_id: Option<DbId>,
        term_id: Option<DbId>,
    ) -> Result<Vec<ExamResult>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM results
             WHERE ($1::bigint IS NULL OR student_id = $1)
               AND ($2::bigint IS NULL OR term_id = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ExamResult>(&query)
            .bind(student_id)
            .bind(term_id)
            .fetch_all(pool)
            .await
    }

    /// List results restricted to one parent's children, with the same
    /// optional filters as [`Self::list_filtered`]. The narrowing happens
    /// in SQL so rows for other families never leave the database.
    pub async fn list_filtered_for_parent(
        pool: &PgPool,
        parent_id: DbId,
        student_id: Option<DbId>,
        term_id: Option<DbId>,
    ) -> Result<Vec<ExamResult>, sqlx::Error> {
        let columns = qualified_columns();
        let query = format!(
            "SELECT {columns} FROM results r
             JOIN students s ON s.id = r.student_id
             WHERE s.parent_id = $1
               AND ($2::bigint IS NULL OR r.student_id = $2)
               AND ($3::bigint IS NULL OR r.term_id = $3)
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, ExamResult>(&query)
            .bind(parent_id)
            .bind(student_id)
            .bind(term_id)
            .fetch_all(pool)
            .await
    }

    /// Update a result. Only non-`None` fields in `input` are applied;
    /// when marks change without an explicit grade, the grade is
    /// recomputed from the merged values. Runs in a transaction so the
    /// read-merge-write is atomic.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExamResult,
    ) -> Result<Option<ExamResult>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM results WHERE id = $1 FOR UPDATE");
        let existing = sqlx::query_as::<_, ExamResult>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let marks_obtained = input.marks_obtained.unwrap_or(existing.marks_obtained);
        let total_marks = input.total_marks.unwrap_or(existing.total_marks);
        let grade = input.grade.clone().or_else(|| {
            grading::grade_for(marks_obtained, total_marks).map(|g| g.as_str().to_string())
        });
        let remarks = input.remarks.clone().or(existing.remarks);

        let update = format!(
            "UPDATE results SET
                marks_obtained = $2,
                total_marks = $3,
                grade = $4,
                remarks = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, ExamResult>(&update)
            .bind(id)
            .bind(marks_obtained)
            .bind(total_marks)
            .bind(grade)
            .bind(remarks)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a result. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM results WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch one student's result lines for one term, subject names
    /// resolved, ordered by subject name.
    pub async fn list_lines_for_term(
        pool: &PgPool,
        student_id: DbId,
        term_id: DbId,
    ) -> Result<Vec<ResultLine>, sqlx::Error> {
        sqlx::query_as::<_, ResultLine>(
            "SELECT sub.name AS subject_name, r.marks_obtained, r.total_marks, r.grade, r.remarks
             FROM results r
             JOIN subjects sub ON sub.id = r.subject_id
             WHERE r.student_id = $1 AND r.term_id = $2
             ORDER BY sub.name",
        )
        .bind(student_id)
        .bind(term_id)
        .fetch_all(pool)
        .await
    }

    /// Fetch every result line for one student across all terms, ordered
    /// by academic-year start date, then term number, then subject name.
    /// Terms the student has no results in produce no rows.
    pub async fn list_trend_lines(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<TrendLine>, sqlx::Error> {
        sqlx::query_as::<_, TrendLine>(
            "SELECT r.term_id, t.term_number, y.label AS year_label,
                    sub.name AS subject_name, r.marks_obtained, r.total_marks, r.grade, r.remarks
             FROM results r
             JOIN subjects sub ON sub.id = r.subject_id
             JOIN terms t ON t.id = r.term_id
             JOIN academic_years y ON y.id = t.academic_year_id
             WHERE r.student_id = $1
             ORDER BY y.start_date, t.term_number, sub.name",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}

/// `COLUMNS` with a `r.` qualifier for joined queries.
fn qualified_columns() -> String {
    COLUMNS
        .split(", ")
        .map(|c| format!("r.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
