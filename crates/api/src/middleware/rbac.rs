//! Role gates built on [`AuthUser`].
//!
//! A handler takes `RequireAdmin(user)` instead of `AuthUser` when the
//! route is admin-only; the 403 happens in the extractor and the
//! handler never sees an unauthorized caller. [`RequireAuth`] admits
//! every role and exists so "any logged-in user" reads as a deliberate
//! choice in the route table rather than a forgotten check.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campus_core::error::CoreError;
use campus_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticate, then apply a role predicate. `denial` becomes the 403
/// message when the predicate fails.
async fn gate(
    parts: &mut Parts,
    state: &AppState,
    allowed: fn(Role) -> bool,
    denial: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if !allowed(user.role) {
        return Err(AppError::Core(CoreError::Forbidden(denial.into())));
    }
    Ok(user)
}

/// Admits only the `ADMIN` role.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        gate(
            parts,
            state,
            |role| role == Role::Admin,
            "Admin role required",
        )
        .await
        .map(RequireAdmin)
    }
}

/// Admits `TEACHER` and `ADMIN`.
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        gate(
            parts,
            state,
            Role::is_staff,
            "Teacher or Admin role required",
        )
        .await
        .map(RequireStaff)
    }
}

/// Admits any authenticated user.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state)
            .await
            .map(RequireAuth)
    }
}
