//! Login API handler
//!
//! Implements:
//! - POST /api/auth/login - Exchange username/password for a signed token

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use biblio_auth::{AuthBackend, AuthError, IssuedToken};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/auth/login`.
///
/// Absent fields deserialize to empty strings, which the login service
/// rejects as invalid credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response shape for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// RFC 3339, whole seconds, `Z` suffix
    pub expires_at: String,
}

impl From<IssuedToken> for LoginResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires_at: issued
                .expires_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// POST /api/auth/login - Issue a token for valid credentials
pub async fn login(
    State(backend): State<AuthBackend>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AuthError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(reason = %rejection, "Unreadable login body");
        AuthError::InvalidCredentials
    })?;

    let issued = backend
        .login()
        .authenticate(&request.username, &request.password)?;

    Ok(Json(LoginResponse::from(issued)))
}
