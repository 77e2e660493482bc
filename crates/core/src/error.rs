//! Domain error type shared by every layer above the database.
//!
//! Variants are deliberately coarse. They carry exactly the distinction
//! the HTTP layer needs to pick a status code, and nothing else.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed row does not exist (or is hidden from the caller).
    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// The input is well-formed JSON but semantically wrong.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request collides with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No usable credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Valid credentials, insufficient rights.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("internal error: {0}")]
    Internal(String),
}
