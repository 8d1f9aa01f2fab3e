//! Avatar URL Derivation
//!
//! Avatars are Gravatar URLs derived from the registered email: lowercase
//! and trim the address, hash it with SHA-256, and render the hex digest
//! into the avatar path. Pure string-to-string derivation; nothing here
//! performs a network call.

use sha2::{Digest, Sha256};

/// Derive the avatar URL for an email address.
///
/// Requests a 300px, PG-rated image with the "mystery person" fallback for
/// addresses without a Gravatar account.
pub fn avatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{digest:x}?s=300&r=pg&d=mm")
}
