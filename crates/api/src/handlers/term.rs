//! Handlers for the `/terms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::term::{CreateTerm, Term, TermWithYear};
use campus_db::repositories::TermRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

/// GET /api/v1/terms
///
/// List all terms with their academic year, in chronological order.
pub async fn list_terms(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<TermWithYear>>> {
    let terms = TermRepo::list(&state.pool).await?;
    Ok(Json(terms))
}

/// POST /api/v1/terms
///
/// Create a term. Admin only. A duplicate (year, term_number) pair
/// returns 409; a term_number outside 1-3 returns 400.
pub async fn create_term(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateTerm>,
) -> AppResult<(StatusCode, Json<Term>)> {
    let term = TermRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(term)))
}

/// PUT /api/v1/terms/{id}/set-current
///
/// Mark one term as current, clearing the flag on every other term
/// (across all years) in the same transaction.
pub async fn set_current_term(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Term>> {
    let term = TermRepo::set_current(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Term", id }))?;
    Ok(Json(term))
}
