//! Request handlers, one submodule per resource.
//!
//! Handlers authenticate via the extractors in [`crate::middleware`],
//! delegate persistence to the repositories in `campus_db`, and map
//! errors through [`AppError`](crate::error::AppError). Role scoping
//! happens here: lists are narrowed per viewer, writes gated per role.

pub mod academic_year;
pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod class_subject;
pub mod fee;
pub mod gallery;
pub mod public_info;
pub mod result;
pub mod school_class;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod term;
