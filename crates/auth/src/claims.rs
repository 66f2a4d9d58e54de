//! JWT claims types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims carried inside every issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expires at, unix seconds
    pub exp: i64,
}

impl Claims {
    /// Claims for `subject`, valid for `ttl` starting at `issued_at`.
    ///
    /// Sub-second precision is dropped; JWT timestamps are whole seconds.
    pub fn new(subject: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: subject.into(),
            iat,
            exp: iat + ttl.num_seconds(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// A token stops being valid at the exact second of `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
