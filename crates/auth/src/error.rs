//! Authentication errors

use axum::{
    http::{header::WWW_AUTHENTICATE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Why a presented token was not accepted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Not a three-segment JWS, undecodable, or missing a mandatory claim
    #[error("malformed token")]
    Malformed,

    /// Signature mismatch, wrong key, or an algorithm other than HS256
    #[error("token signature is invalid")]
    SignatureInvalid,

    #[error("token has expired")]
    Expired,

    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// Authentication error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Unknown user or wrong password; deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("authorization header missing")]
    MissingCredential,

    #[error("authorization header is not `Bearer <token>`")]
    MalformedCredential,

    #[error("token rejected: {0}")]
    Unauthorized(TokenError),

    /// Anything that is the server's fault; details are logged, not returned
    #[error("internal authentication failure: {0}")]
    Internal(String),
}

impl AuthError {
    /// Client-facing message for the 401 family
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Credenciales inválidas",
            AuthError::Unauthorized(TokenError::Expired) => "Token expirado",
            AuthError::MissingCredential
            | AuthError::MalformedCredential
            | AuthError::Unauthorized(_) => "Token inválido o ausente",
            AuthError::Internal(_) => biblio_common::error::INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(detail) => AuthError::Internal(detail),
            other => AuthError::Unauthorized(other),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Internal(detail) = self {
            return biblio_common::Error::Internal(detail).into_response();
        }

        let body = Json(json!({
            "error": self.message(),
        }));

        (
            self.status_code(),
            [(WWW_AUTHENTICATE, "Bearer")],
            body,
        )
            .into_response()
    }
}
