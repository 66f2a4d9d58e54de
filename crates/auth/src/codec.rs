//! HS256 token encoding and verification

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::Claims;
use crate::error::TokenError;

/// The only algorithm the server signs with or accepts
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Signs and verifies tokens with one symmetric secret.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        // Expiry is checked in `decode_at` against an exact boundary, without leeway.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Serialize and sign `claims` as a compact JWS.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(TOKEN_ALGORITHM), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "JWT encoding failed");
            TokenError::Encoding(e.to_string())
        })
    }

    /// Verify `token` against the current wall clock.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_at(token, Utc::now())
    }

    /// Verify `token` as of `now`.
    ///
    /// Structure and signature are checked before expiry, so a tampered
    /// token reports `SignatureInvalid` even when it is also stale.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "JWT validation failed");
                classify(e.kind())
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            tracing::debug!(sub = %claims.sub, exp = claims.exp, "JWT expired");
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName => TokenError::SignatureInvalid,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
