//! Well-known role name constants and the closed role set.
//!
//! Role strings are stored verbatim in the `users.role` column (a TEXT
//! column with a CHECK constraint) and embedded in JWT claims, so the
//! constants here must match the database migration exactly.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_TEACHER: &str = "TEACHER";
pub const ROLE_PARENT: &str = "PARENT";

/// The closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    Admin,
    Teacher,
    Parent,
}

impl Role {
    /// The database / JWT string for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Teacher => ROLE_TEACHER,
            Self::Parent => ROLE_PARENT,
        }
    }

    /// Parse a stored role string. Unknown values are a validation error.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            ROLE_ADMIN => Ok(Self::Admin),
            ROLE_TEACHER => Ok(Self::Teacher),
            ROLE_PARENT => Ok(Self::Parent),
            other => Err(CoreError::Validation(format!("Unknown role: {other}"))),
        }
    }

    /// Staff roles (teacher or admin) may enter results and attendance.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Teacher)
    }
}
