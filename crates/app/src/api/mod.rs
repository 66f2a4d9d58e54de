//! HTTP surface of the Biblio API

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::routes;
pub use state::AppState;
