//! Axum extractors for authentication
//!
//! `AuthUser` reads the claims `require_jwt` left in the request extensions.
//! It does no verification of its own, so it is only meaningful on routes
//! behind that middleware.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::claims::Claims;
use crate::error::AuthError;

/// Authenticated caller (JWT only)
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn username(&self) -> &str {
        self.0.subject()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::MissingCredential)
    }
}
