//! Unauthenticated endpoints

use axum::Json;
use serde::Serialize;

pub const PUBLIC_MESSAGE: &str = "Este es un endpoint público, cualquiera puede acceder";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/public
pub async fn public() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: PUBLIC_MESSAGE,
    })
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
