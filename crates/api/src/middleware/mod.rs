//! Request extractors that decide who is calling.
//!
//! [`auth`] turns a Bearer token into an [`auth::AuthUser`] (or an
//! optional [`auth::MaybeUser`] on routes that also serve anonymous
//! visitors). [`rbac`] layers role checks on top, so a handler states
//! its access rule in its signature.

pub mod auth;
pub mod rbac;
