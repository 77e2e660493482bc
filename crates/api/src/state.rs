use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler via `State<AppState>`.
///
/// Cloned per request; both fields are reference-counted handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: campus_db::DbPool,
    pub config: Arc<ServerConfig>,
}
