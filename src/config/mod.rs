//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the `IKM_`
//! prefix and nested values use double underscores as separators, e.g.
//! `IKM_DATABASE__URL`, `IKM_AUTH__ADMIN_PIN`.

mod auth;
mod database;
mod error;
mod server;
mod survey;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::{Environment, ServerConfig};
pub use survey::SurveyConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Admin authentication (PIN, token secret, inactivity timeout)
    pub auth: AuthConfig,

    /// Survey scheme source
    #[serde(default)]
    pub survey: SurveyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first when present (development convenience),
    /// then environment variables with the `IKM_` prefix.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("IKM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = settings.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.auth.validate()?;
        self.server.socket_addr()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn valid_config() -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://localhost/ikm".to_string(),
                max_connections: 5,
                connect_timeout_secs: 10,
            },
            auth: AuthConfig {
                admin_pin: SecretString::new("@dmin123".to_string()),
                token_secret: SecretString::new("0123456789abcdef".to_string()),
                session_timeout_secs: 300,
            },
            survey: SurveyConfig::default(),
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validation_cascades_into_sections() {
        let mut config = valid_config();
        config.database.url = String::new();
        assert!(config.validate().is_err());
    }
}
