//! Handlers for the `/results` resource.
//!
//! Covers result CRUD plus the derived read models: per-term summary,
//! cross-term trend, and the downloadable report card. Parents are
//! narrowed to their own children everywhere; marks entry is staff-only
//! and deletion admin-only.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::report::{render_report_card, report_filename, ReportCardData};
use campus_core::roles::Role;
use campus_core::summary::{self, build_trend, SubjectLine, TermSummary, TrendRow};
use campus_core::types::DbId;
use campus_db::models::exam_result::{
    CreateExamResult, ExamResult, ResultLine, TrendLine, UpdateExamResult,
};
use campus_db::models::student::Student;
use campus_db::models::term::TermWithYear;
use campus_db::repositories::{ResultRepo, SchoolClassRepo, StudentRepo, TeacherRepo, TermRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::query::StudentTermParams;
use crate::state::AppState;

/// GET /api/v1/results
///
/// List results, optionally filtered by `?student=` and `?term=`.
/// Parents only ever receive rows for their own children; the filters
/// narrow within that scope.
pub async fn list_results(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<StudentTermParams>,
) -> AppResult<Json<Vec<ExamResult>>> {
    let results = match user.role {
        Role::Admin | Role::Teacher => {
            ResultRepo::list_filtered(&state.pool, params.student, params.term).await?
        }
        Role::Parent => {
            ResultRepo::list_filtered_for_parent(
                &state.pool,
                user.user_id,
                params.student,
                params.term,
            )
            .await?
        }
    };
    Ok(Json(results))
}

/// GET /api/v1/results/{id}
pub async fn get_result(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ExamResult>> {
    let result = ResultRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Result",
            id,
        }))?;

    if user.role == Role::Parent {
        // Re-resolve the student so the ownership check cannot be skipped
        // by guessing result IDs.
        fetch_student_checked(
            &state,
            user,
            result.student_id,
            "You can only view your children's results",
        )
        .await?;
    }

    Ok(Json(result))
}

/// POST /api/v1/results
///
/// Record a result. Teachers and admins only. When a teacher enters the
/// result, their teacher profile is stamped as `entered_by`; admin
/// entries carry no profile.
pub async fn create_result(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Json(input): Json<CreateExamResult>,
) -> AppResult<(StatusCode, Json<ExamResult>)> {
    validate_marks(input.marks_obtained, input.total_marks.unwrap_or(100.0))?;

    let entered_by = match user.role {
        Role::Teacher => TeacherRepo::find_by_user_id(&state.pool, user.user_id)
            .await?
            .map(|t| t.id),
        _ => None,
    };

    // A second entry for the same (student, subject, term) surfaces as
    // 409 via uq_results_student_subject_term; a dangling student,
    // subject, or term reference as 400.
    let result = ResultRepo::create(&state.pool, &input, entered_by).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// PUT /api/v1/results/{id}
///
/// Amend a result's marks, grade, or remarks. Teachers and admins only.
pub async fn update_result(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExamResult>,
) -> AppResult<Json<ExamResult>> {
    if let Some(marks) = input.marks_obtained {
        if marks < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "marks_obtained cannot be negative".into(),
            )));
        }
    }
    if let Some(total) = input.total_marks {
        if total <= 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "total_marks must be greater than zero".into(),
            )));
        }
    }

    let result = ResultRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Result",
            id,
        }))?;
    Ok(Json(result))
}

/// DELETE /api/v1/results/{id}
///
/// Remove a result row. Admin only.
pub async fn delete_result(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ResultRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Result",
            id,
        }))
    }
}

/// GET /api/v1/results/summary/{student_id}/{term_id}
///
/// Aggregated results for one student in one term: per-subject lines
/// plus totals, overall percentage, and overall grade. A term with no
/// results answers 200 with empty lines and no grade.
pub async fn result_summary(
    State(state): State<AppState>,
    user: AuthUser,
    Path((student_id, term_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<TermSummary>> {
    let student = fetch_student_checked(
        &state,
        user,
        student_id,
        "You can only view your children's results",
    )
    .await?;

    let (_term, summary) = load_term_summary(&state, &student, term_id).await?;
    Ok(Json(summary))
}

/// GET /api/v1/results/trend/{student_id}
///
/// One summary per term the student has results in, ordered oldest
/// first. Terms without results are omitted rather than zero-filled.
pub async fn result_trend(
    State(state): State<AppState>,
    user: AuthUser,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<Vec<TermSummary>>> {
    let student = fetch_student_checked(
        &state,
        user,
        student_id,
        "You can only view your children's results",
    )
    .await?;

    let rows = ResultRepo::list_trend_lines(&state.pool, student_id)
        .await?
        .into_iter()
        .map(trend_row)
        .collect();

    let trend = build_trend(student.id, &student.full_name(), rows);
    Ok(Json(trend))
}

/// GET /api/v1/results/report-card/{student_id}/{term_id}
///
/// Render the student's report card for one term and serve it as an
/// HTML attachment.
pub async fn report_card(
    State(state): State<AppState>,
    user: AuthUser,
    Path((student_id, term_id)): Path<(DbId, DbId)>,
) -> AppResult<Response> {
    let student = fetch_student_checked(
        &state,
        user,
        student_id,
        "You can only download your children's reports",
    )
    .await?;

    let (term, summary) = load_term_summary(&state, &student, term_id).await?;

    let class_name = match student.current_class_id {
        Some(class_id) => SchoolClassRepo::find_by_id(&state.pool, class_id)
            .await?
            .map(|c| c.name),
        None => None,
    };

    let data = ReportCardData {
        student_code: student.student_code.clone(),
        class_name,
        year_label: term.year_label.clone(),
        term_number: term.term_number,
        summary,
    };
    let html = render_report_card(&data);
    let filename = report_filename(&student.student_code, &term.year_label, term.term_number);

    let headers = [
        (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, html).into_response())
}

/// Load a student, enforcing that parents only reach their own children.
/// Missing students are 404 for every role; existing students belonging
/// to another family are 403 with the endpoint's denial message.
async fn fetch_student_checked(
    state: &AppState,
    user: AuthUser,
    student_id: DbId,
    denied: &str,
) -> AppResult<Student> {
    let student = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        }))?;

    if user.role == Role::Parent && student.parent_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(denied.into())));
    }
    Ok(student)
}

/// Resolve the term and fold the student's stored lines for it into a
/// [`TermSummary`].
async fn load_term_summary(
    state: &AppState,
    student: &Student,
    term_id: DbId,
) -> AppResult<(TermWithYear, TermSummary)> {
    let term = TermRepo::find_with_year(&state.pool, term_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Term",
            id: term_id,
        }))?;

    let lines = ResultRepo::list_lines_for_term(&state.pool, student.id, term_id)
        .await?
        .into_iter()
        .map(subject_line)
        .collect();

    let term_display = format!(
        "{} - {}",
        summary::term_label(term.term_number),
        term.year_label
    );
    let summary = TermSummary::compute(
        student.id,
        student.full_name(),
        term.id,
        term_display,
        lines,
    );
    Ok((term, summary))
}

fn validate_marks(marks_obtained: f64, total_marks: f64) -> AppResult<()> {
    if marks_obtained < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "marks_obtained cannot be negative".into(),
        )));
    }
    if total_marks <= 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "total_marks must be greater than zero".into(),
        )));
    }
    Ok(())
}

fn subject_line(line: ResultLine) -> SubjectLine {
    SubjectLine {
        subject: line.subject_name,
        marks_obtained: line.marks_obtained,
        total_marks: line.total_marks,
        grade: line.grade,
        remarks: line.remarks,
    }
}

fn trend_row(line: TrendLine) -> TrendRow {
    TrendRow {
        term_id: line.term_id,
        term_display: format!(
            "{} - {}",
            summary::term_label(line.term_number),
            line.year_label
        ),
        line: SubjectLine {
            subject: line.subject_name,
            marks_obtained: line.marks_obtained,
            total_marks: line.total_marks,
            grade: line.grade,
            remarks: line.remarks,
        },
    }
}
