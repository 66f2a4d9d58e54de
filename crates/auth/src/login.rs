//! Credential check and token issuance

use std::sync::Arc;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use tracing::{info, warn};

use crate::claims::Claims;
use crate::codec::TokenCodec;
use crate::credentials::CredentialStore;
use crate::error::AuthError;

/// A freshly signed token and the instant it stops being accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct LoginService {
    credentials: CredentialStore,
    codec: Arc<TokenCodec>,
    ttl: Duration,
}

impl LoginService {
    pub fn new(credentials: CredentialStore, codec: Arc<TokenCodec>, ttl: Duration) -> Self {
        Self {
            credentials,
            codec,
            ttl,
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        self.authenticate_at(username, password, Utc::now())
    }

    /// Check the credentials and, on success, issue a token valid from `now`.
    ///
    /// Unknown users and wrong passwords both yield `InvalidCredentials`.
    pub fn authenticate_at(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        if username.is_empty() || password.is_empty() || !self.credentials.verify(username, password)
        {
            // The field may hold a mistyped password, so only its length is logged
            warn!(username_len = username.len(), "Failed login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        let issued_at = now.trunc_subsecs(0);
        let claims = Claims::new(username, issued_at, self.ttl);
        let token = self.codec.encode(&claims)?;

        info!(username = %username, exp = claims.exp, "Login successful");

        Ok(IssuedToken {
            token,
            expires_at: issued_at + self.ttl,
        })
    }
}
