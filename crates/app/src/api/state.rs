//! Application state and auth backend integration

use axum::extract::FromRef;
use biblio_auth::AuthBackend;
use biblio_common::AuthMode;

/// Application state shared by every route
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthBackend,
    pub mode: AuthMode,
}

impl FromRef<AppState> for AuthBackend {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
