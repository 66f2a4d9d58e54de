//! Biblio application composition root
//!
//! Builds the auth backend from configuration and mounts the routes for the
//! configured auth mode.

pub mod api;

use axum::Router;
use biblio_auth::{AuthBackend, AuthConfig};
use biblio_common::Config;

pub use api::AppState;

/// Create the main application router with all routes
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    if config.credentials.is_empty() {
        anyhow::bail!("at least one user is required in AUTH_CREDENTIALS");
    }

    let state = AppState {
        auth: AuthBackend::new(AuthConfig::from(config)),
        mode: config.auth_mode,
    };

    tracing::info!(mode = %config.auth_mode, "Routes configured");

    Ok(api::routes(state))
}
