//! Cryptographic utilities shared across Biblio crates
//!
//! Constant-time comparison for shared secrets, so that response timing
//! does not reveal how much of a guessed token was correct.

use sha2::{Digest, Sha256};

/// Compare two byte strings in constant time with respect to their contents.
///
/// Only the lengths can short-circuit the comparison.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Verify a presented token against the configured shared token.
///
/// Both values are hashed with SHA-256 first so the comparison always runs
/// over 32 bytes and the expected token's length is not observable.
pub fn verify_shared_token(candidate: &str, expected: &str) -> bool {
    let candidate_hash = Sha256::digest(candidate.as_bytes());
    let expected_hash = Sha256::digest(expected.as_bytes());
    constant_time_eq(&candidate_hash, &expected_hash)
}
