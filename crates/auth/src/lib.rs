//! Authentication core for the Biblio API
//!
//! Provides the credential store, the HS256 token codec, the login service,
//! and axum middleware/extractors that work with any state implementing
//! `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod codec;
mod config;
mod credentials;
mod error;
mod extractors;
mod guard;
mod login;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use codec::TokenCodec;
pub use config::AuthConfig;
pub use credentials::CredentialStore;
pub use error::{AuthError, TokenError};
pub use extractors::AuthUser;
pub use guard::{require_jwt, require_static_token};
pub use login::{IssuedToken, LoginService};
