use crate::auth::jwt::JwtConfig;

/// HTTP server settings, read once at startup.
///
/// Every field has a local-development default so `cargo run` works
/// with nothing but `JWT_SECRET` and `DATABASE_URL` set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins the browser frontends are served from.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Build the config from the environment.
    ///
    /// Recognised variables: `HOST` (default `0.0.0.0`), `PORT`
    /// (default `3000`), `CORS_ORIGINS` (comma-separated, default
    /// `http://localhost:5173`), `REQUEST_TIMEOUT_SECS` (default `30`),
    /// plus the `JWT_*` variables read by [`JwtConfig::from_env`].
    ///
    /// Panics on unparseable numeric values rather than limping along
    /// with a default the operator did not ask for.
    pub fn from_env() -> Self {
        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins: parse_origin_list(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, dropping blanks so a trailing
/// comma in the env var does not produce an empty origin.
fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
