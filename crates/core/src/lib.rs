//! Pure domain logic for the Campus school-management platform.
//!
//! Everything in this crate is side-effect free: grading, result
//! aggregation, fee status rules, announcement visibility, and the
//! report-card renderer all operate on plain values so they can be
//! tested without a database or HTTP stack.

pub mod announcements;
pub mod attendance;
pub mod error;
pub mod fees;
pub mod grading;
pub mod report;
pub mod roles;
pub mod summary;
pub mod types;
