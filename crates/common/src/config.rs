//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Every value has a default
//! matching the exercise setup, so a bare `cargo run` serves the demo user.

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_JWT_SECRET: &str = "clave_secreta_jwt_para_firmar_tokens";
pub const DEFAULT_JWT_TTL_SECONDS: u32 = 3600;
pub const DEFAULT_API_TOKEN: &str = "mi_token_secreto_1234";
pub const DEFAULT_CREDENTIALS: &str = "usuario_demo:password123";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RUST_LOG: &str = "biblio=debug,local=info,tower_http=debug";

/// Which guard protects the secret resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Signed, expiring tokens issued by `POST /api/auth/login`
    Jwt,
    /// One shared bearer token, no login endpoint
    Static,
}

impl FromStr for AuthMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jwt" => Ok(AuthMode::Jwt),
            "static" => Ok(AuthMode::Static),
            other => bail!("AUTH_MODE must be `jwt` or `static`, got `{}`", other),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Jwt => write!(f, "jwt"),
            AuthMode::Static => write!(f, "static"),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub auth_mode: AuthMode,

    /// HS256 signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub jwt_ttl_seconds: u32,

    /// Shared bearer token for `AuthMode::Static`
    pub api_token: String,

    /// Static username/password pairs (plaintext, exercise only)
    pub credentials: Vec<(String, String)>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_mode: AuthMode::Jwt,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_ttl_seconds: DEFAULT_JWT_TTL_SECONDS,
            api_token: DEFAULT_API_TOKEN.to_string(),
            credentials: vec![("usuario_demo".to_string(), "password123".to_string())],
            rust_log: DEFAULT_RUST_LOG.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// Secrets stay out of logs even when the config is printed with `{:?}`.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let usernames: Vec<&str> = self.credentials.iter().map(|(u, _)| u.as_str()).collect();
        f.debug_struct("Config")
            .field("auth_mode", &self.auth_mode)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_ttl_seconds", &self.jwt_ttl_seconds)
            .field("api_token", &"<redacted>")
            .field("credentials", &usernames)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a map instead
    /// of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_mode = match lookup("AUTH_MODE") {
            Some(raw) => raw.parse()?,
            None => AuthMode::Jwt,
        };

        let jwt_secret = lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());
        if jwt_secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let jwt_ttl_seconds = match lookup("JWT_TTL_SECONDS") {
            Some(raw) => parse_ttl(&raw)?,
            None => DEFAULT_JWT_TTL_SECONDS,
        };

        let api_token = lookup("API_TOKEN").unwrap_or_else(|| DEFAULT_API_TOKEN.to_string());
        if api_token.is_empty() {
            bail!("API_TOKEN must not be empty");
        }

        let credentials = parse_credentials(
            &lookup("AUTH_CREDENTIALS").unwrap_or_else(|| DEFAULT_CREDENTIALS.to_string()),
        )?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got `{}`", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            auth_mode,
            jwt_secret,
            jwt_ttl_seconds,
            api_token,
            credentials,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string()),
            port,
        })
    }
}

fn parse_ttl(raw: &str) -> Result<u32> {
    let ttl: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("JWT_TTL_SECONDS must be a positive integer, got `{}`", raw))?;
    if ttl == 0 {
        bail!("JWT_TTL_SECONDS must be greater than zero");
    }
    Ok(ttl)
}

/// Parse `user:password` pairs separated by commas.
///
/// Only the first `:` splits a pair, so passwords may contain colons.
fn parse_credentials(raw: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((username, password)) = entry.split_once(':') else {
            bail!("AUTH_CREDENTIALS entries must look like `user:password`");
        };
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            bail!("AUTH_CREDENTIALS entries need a non-empty username and password");
        }
        if pairs.iter().any(|(u, _): &(String, String)| u == username) {
            bail!("AUTH_CREDENTIALS lists user `{}` twice", username);
        }
        pairs.push((username.to_string(), password.to_string()));
    }

    if pairs.is_empty() {
        bail!("AUTH_CREDENTIALS must contain at least one user:password pair");
    }

    Ok(pairs)
}
