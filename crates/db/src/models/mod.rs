//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! The `User` entity is the exception: it carries the password hash and
//! is never serialized; [`user::UserResponse`] is the external shape.

pub mod academic_year;
pub mod announcement;
pub mod attendance;
pub mod class_subject;
pub mod exam_result;
pub mod fee;
pub mod gallery;
pub mod public_info;
pub mod school_class;
pub mod session;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod term;
pub mod user;
