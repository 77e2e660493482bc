//! HTTP server for the school platform.
//!
//! Everything is exported because the integration tests and the
//! `campus-api` binary drive the same modules.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
