//! Concrete authentication backend
//!
//! Bundles the token codec, the login service and the shared API token.
//! Everything inside is immutable, so clones are cheap `Arc` bumps and
//! concurrent requests never coordinate.

use std::sync::Arc;

use biblio_common::verify_shared_token;

use crate::codec::TokenCodec;
use crate::config::AuthConfig;
use crate::credentials::CredentialStore;
use crate::login::LoginService;

/// Concrete authentication backend.
///
/// Application states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<AppState> for AuthBackend {
///     fn from_ref(state: &AppState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    codec: Arc<TokenCodec>,
    login: Arc<LoginService>,
    api_token: Arc<str>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        let codec = Arc::new(TokenCodec::new(&config.jwt_secret));
        let credentials = CredentialStore::new(config.credentials);

        if credentials.is_empty() {
            tracing::warn!("No credentials configured; every login will be rejected");
        }

        tracing::debug!(
            users = credentials.len(),
            ttl_seconds = config.token_ttl.num_seconds(),
            "Auth backend initialised"
        );

        let login = LoginService::new(credentials, codec.clone(), config.token_ttl);

        Self {
            codec,
            login: Arc::new(login),
            api_token: Arc::from(config.api_token),
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn login(&self) -> &LoginService {
        &self.login
    }

    /// Constant-time check of a bearer value against the shared API token
    pub(crate) fn verify_api_token(&self, candidate: &str) -> bool {
        verify_shared_token(candidate, &self.api_token)
    }
}
