//! Protected resource handlers
//!
//! Both variants serve `GET /api/secret`; which one is mounted depends on
//! the configured auth mode. Neither checks credentials itself.

use axum::Json;
use biblio_auth::AuthUser;
use serde::Serialize;

pub const SECRET: &str = "La respuesta a la vida, el universo y todo lo demás es 42";
pub const JWT_SECRET_MESSAGE: &str = "¡Has accedido al secreto con JWT!";
pub const STATIC_SECRET_MESSAGE: &str = "¡Has accedido al secreto!";

#[derive(Debug, Serialize)]
pub struct SecretResponse {
    pub message: &'static str,
    pub secret: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// GET /api/secret behind `require_jwt`
pub async fn jwt_secret(user: AuthUser) -> Json<SecretResponse> {
    tracing::debug!(username = %user.username(), "Secret served");

    Json(SecretResponse {
        message: JWT_SECRET_MESSAGE,
        secret: SECRET,
        user: Some(user.username().to_string()),
    })
}

/// GET /api/secret behind `require_static_token`
pub async fn static_secret() -> Json<SecretResponse> {
    Json(SecretResponse {
        message: STATIC_SECRET_MESSAGE,
        secret: SECRET,
        user: None,
    })
}
