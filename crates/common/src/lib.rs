//! Shared utilities, configuration, and error handling for Biblio
//!
//! This crate provides common functionality used across the Biblio API:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Constant-time comparison helpers for shared secrets

pub mod config;
pub mod crypto;
pub mod error;

pub use config::{AuthMode, Config};
pub use crypto::{constant_time_eq, verify_shared_token};
pub use error::Error;
