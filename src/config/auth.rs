//! Admin authentication configuration.
//!
//! The PIN and the token signing secret are held as secrets; neither is ever
//! serialized back out or sent to a client.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ConfigError;

fn default_session_timeout_secs() -> u64 {
    // Five minutes of inactivity, matching the dashboard's auto-logout.
    300
}

/// Admin authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// The admin PIN. Server-side only.
    pub admin_pin: SecretString,
    /// HMAC secret for session tokens.
    pub token_secret: SecretString,
    #[serde(default = "default_session_timeout_secs")]
    pub session_timeout_secs: u64,
}

impl AuthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.admin_pin.expose_secret().len() < 6 {
            return Err(ConfigError::Invalid(
                "auth.admin_pin must be at least 6 characters".to_string(),
            ));
        }
        if self.token_secret.expose_secret().len() < 16 {
            return Err(ConfigError::Invalid(
                "auth.token_secret must be at least 16 characters".to_string(),
            ));
        }
        if self.session_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "auth.session_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
