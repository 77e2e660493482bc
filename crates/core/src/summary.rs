//! Term-level result aggregation.
//!
//! [`TermSummary::compute`] folds a student's stored subject results for
//! one term into totals, an overall percentage, and an overall grade.
//! An empty input is a valid summary (zero totals, ungraded), never an
//! error: a term a student simply has no results in must still answer
//! deterministically.

use serde::Serialize;

use crate::grading::{self, Grade};
use crate::types::DbId;

/// One stored subject result, as fetched from persistence.
#[derive(Debug, Clone)]
pub struct SubjectLine {
    pub subject: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    /// Stored grade, if the row carries one. Recomputed from the marks
    /// when absent.
    pub grade: Option<String>,
    pub remarks: Option<String>,
}

/// A subject line enriched with its derived percentage and effective grade.
#[derive(Debug, Clone, Serialize)]
pub struct GradedLine {
    pub subject: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    /// Rounded to two decimals. `None` when `total_marks` is not positive.
    pub percentage: Option<f64>,
    pub grade: Option<String>,
    pub remarks: Option<String>,
}

impl GradedLine {
    fn from_subject_line(line: SubjectLine) -> Self {
        let percentage = grading::percentage(line.marks_obtained, line.total_marks).map(round2);
        let grade = line.grade.or_else(|| {
            grading::grade_for(line.marks_obtained, line.total_marks)
                .map(|g| g.as_str().to_string())
        });
        Self {
            subject: line.subject,
            marks_obtained: line.marks_obtained,
            total_marks: line.total_marks,
            percentage,
            grade,
            remarks: line.remarks,
        }
    }
}

/// Aggregated results for one student in one term.
#[derive(Debug, Clone, Serialize)]
pub struct TermSummary {
    pub student_id: DbId,
    pub student_name: String,
    pub term_id: DbId,
    pub term_display: String,
    pub results: Vec<GradedLine>,
    pub total_marks_obtained: f64,
    pub total_marks_possible: f64,
    /// Rounded to two decimals. `0.0` when no gradeable marks exist.
    pub overall_percentage: f64,
    /// `None` when the term is ungraded (no results, or zero possible marks).
    pub overall_grade: Option<Grade>,
    pub has_results: bool,
}

impl TermSummary {
    /// Aggregate stored subject lines into a term summary.
    ///
    /// The overall grade is derived from the full-precision mark ratio,
    /// not from the rounded display percentage, so a term at 89.996%
    /// still rounds up for display without being promoted to A+.
    pub fn compute(
        student_id: DbId,
        student_name: String,
        term_id: DbId,
        term_display: String,
        lines: Vec<SubjectLine>,
    ) -> Self {
        let has_results = !lines.is_empty();

        let total_marks_obtained: f64 = lines.iter().map(|l| l.marks_obtained).sum();
        let total_marks_possible: f64 = lines.iter().map(|l| l.total_marks).sum();

        let overall = grading::percentage(total_marks_obtained, total_marks_possible);
        let overall_percentage = overall.map(round2).unwrap_or(0.0);
        let overall_grade = overall.map(Grade::from_percentage);

        let results = lines.into_iter().map(GradedLine::from_subject_line).collect();

        Self {
            student_id,
            student_name,
            term_id,
            term_display,
            results,
            total_marks_obtained,
            total_marks_possible,
            overall_percentage,
            overall_grade,
            has_results,
        }
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// One result row fetched for a trend query, tagged with its term.
#[derive(Debug, Clone)]
pub struct TrendRow {
    pub term_id: DbId,
    pub term_display: String,
    pub line: SubjectLine,
}

/// Group trend rows into one [`TermSummary`] per term.
///
/// Rows must already be ordered by (academic-year start date, term
/// ordinal); the grouping preserves that order. Terms with zero rows
/// for the student never appear in the input, so they are naturally
/// omitted from the trend.
pub fn build_trend(student_id: DbId, student_name: &str, rows: Vec<TrendRow>) -> Vec<TermSummary> {
    let mut trend: Vec<TermSummary> = Vec::new();
    let mut current: Option<(DbId, String, Vec<SubjectLine>)> = None;

    for row in rows {
        match &mut current {
            Some((term_id, _, lines)) if *term_id == row.term_id => lines.push(row.line),
            _ => {
                if let Some((term_id, display, lines)) = current.take() {
                    trend.push(TermSummary::compute(
                        student_id,
                        student_name.to_string(),
                        term_id,
                        display,
                        lines,
                    ));
                }
                current = Some((row.term_id, row.term_display, vec![row.line]));
            }
        }
    }
    if let Some((term_id, display, lines)) = current {
        trend.push(TermSummary::compute(
            student_id,
            student_name.to_string(),
            term_id,
            display,
            lines,
        ));
    }
    trend
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Display name for a term ordinal, e.g. `1` -> `"First Term"`.
pub fn term_label(term_number: i16) -> String {
    match term_number {
        1 => "First Term".to_string(),
        2 => "Second Term".to_string(),
        3 => "Third Term".to_string(),
        n => format!("Term {n}"),
    }
}

/// Round to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
