//! Request guards for protected routes
//!
//! Mount with `axum::middleware::from_fn_with_state(backend, require_jwt)`.
//! On success the decoded `Claims` are inserted into the request extensions
//! where `AuthUser` picks them up.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::AuthBackend;
use crate::error::{AuthError, TokenError};

const BEARER_PREFIX: &str = "Bearer ";

/// Reject the request unless it carries a valid, unexpired bearer JWT.
pub async fn require_jwt(
    State(backend): State<AuthBackend>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers())?;

    let claims = backend.codec().decode(token).map_err(|e| {
        tracing::debug!(reason = %e, path = %req.uri().path(), "Rejected bearer token");
        AuthError::Unauthorized(e)
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Reject the request unless its bearer value equals the shared API token.
///
/// No claims are attached; there is no subject or expiry to report.
pub async fn require_static_token(
    State(backend): State<AuthBackend>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers())?;

    if !backend.verify_api_token(token) {
        tracing::debug!(path = %req.uri().path(), "Rejected static API token");
        return Err(AuthError::Unauthorized(TokenError::SignatureInvalid));
    }

    Ok(next.run(req).await)
}

/// Extract the token from `Authorization: Bearer <token>`.
///
/// The scheme keyword is case-sensitive and followed by exactly one space;
/// whitespace around the token itself is ignored.
pub(crate) fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    let header_str = header
        .to_str()
        .map_err(|_| AuthError::MalformedCredential)?;

    let token = header_str
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MalformedCredential)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MalformedCredential);
    }

    Ok(token)
}
