//! Authentication configuration

use std::fmt;

use biblio_common::Config;
use chrono::Duration;

/// Authentication configuration, built once at startup
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub api_token: String,
    pub credentials: Vec<(String, String)>,
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            token_ttl: Duration::seconds(i64::from(config.jwt_ttl_seconds)),
            api_token: config.api_token.clone(),
            credentials: config.credentials.clone(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("api_token", &"<redacted>")
            .field("credentials", &self.credentials.len())
            .finish()
    }
}
