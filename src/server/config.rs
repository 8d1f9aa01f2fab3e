/**
 * Server Configuration
 *
 * Process-wide configuration, read from the environment exactly once at
 * startup into an immutable struct. Everything downstream receives the
 * values it needs through constructors; nothing else in the crate reads
 * the environment.
 *
 * # Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - HS256 signing secret for session tokens (required)
 * - `SERVER_PORT` - listen port, defaults to 5000
 */

use thiserror::Error;

/// Default listen port when `SERVER_PORT` is unset or unparsable.
const DEFAULT_PORT: u16 = 5000;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Immutable process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Shared secret for signing and verifying session tokens
    pub jwt_secret: String,
    /// Port the HTTP listener binds to
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Fails when a required variable is absent; the server refuses to
    /// start rather than running with a default secret.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_message_names_the_variable() {
        let error = ConfigError::MissingVar("JWT_SECRET");
        assert!(error.to_string().contains("JWT_SECRET"));
    }
}
