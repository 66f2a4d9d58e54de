//! Route definitions for the Biblio API

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use biblio_auth::{require_jwt, require_static_token};
use biblio_common::{AuthMode, Error};

use super::handlers::{auth, public, secret};
use super::state::AppState;

/// Routes reachable without credentials
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(public::health_check))
        .route("/api/public", get(public::public))
}

/// Login plus the JWT-guarded secret
fn jwt_routes(state: &AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/api/secret", get(secret::jwt_secret))
        .route_layer(from_fn_with_state(state.auth.clone(), require_jwt));

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .merge(guarded)
}

/// Secret guarded by the shared API token; there is no login
fn static_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/secret", get(secret::static_secret))
        .route_layer(from_fn_with_state(state.auth.clone(), require_static_token))
}

/// Create all routes for the configured auth mode
pub fn routes(state: AppState) -> Router {
    let guarded = match state.mode {
        AuthMode::Jwt => jwt_routes(&state),
        AuthMode::Static => static_routes(&state),
    };

    Router::new()
        .merge(public_routes())
        .merge(guarded)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> Error {
    Error::NotFound("Ruta no encontrada".to_string())
}
