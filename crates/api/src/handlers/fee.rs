//! Handlers for the `/fees` resource.
//!
//! Fee records are admin-managed. The payment status is derived from
//! the amounts at the repository layer on every write, so amending
//! `amount_paid` is how a payment is recorded.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::roles::Role;
use campus_core::types::DbId;
use campus_db::models::fee::{CreateFee, Fee, UpdateFee};
use campus_db::repositories::FeeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::StudentTermParams;
use crate::state::AppState;

/// GET /api/v1/fees
///
/// List fee records, optionally filtered by `?student=` and `?term=`.
/// Parents only receive rows for their own children.
pub async fn list_fees(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<StudentTermParams>,
) -> AppResult<Json<Vec<Fee>>> {
    let fees = match user.role {
        Role::Admin | Role::Teacher => {
            FeeRepo::list_filtered(&state.pool, params.student, params.term).await?
        }
        Role::Parent => {
            FeeRepo::list_filtered_for_parent(&state.pool, user.user_id, params.student, params.term)
                .await?
        }
    };
    Ok(Json(fees))
}

/// POST /api/v1/fees
///
/// Create a fee record for a student and term. Admin only.
pub async fn create_fee(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateFee>,
) -> AppResult<(StatusCode, Json<Fee>)> {
    validate_amounts(Some(input.amount), input.amount_paid)?;

    let fee = FeeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(fee)))
}

/// PUT /api/v1/fees/{id}
///
/// Amend a fee record. Admin only. The status is re-derived from the
/// merged amounts, so paying a fee off flips it to paid without the
/// client ever sending a status.
pub async fn update_fee(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFee>,
) -> AppResult<Json<Fee>> {
    validate_amounts(input.amount, input.amount_paid)?;

    let fee = FeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Fee", id }))?;
    Ok(Json(fee))
}

fn validate_amounts(amount: Option<f64>, amount_paid: Option<f64>) -> AppResult<()> {
    if let Some(amount) = amount {
        if amount < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "amount cannot be negative".into(),
            )));
        }
    }
    if let Some(paid) = amount_paid {
        if paid < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "amount_paid cannot be negative".into(),
            )));
        }
    }
    Ok(())
}
