/**
 * Authentication Handler Types
 *
 * Request and response types used by the authentication handlers.
 *
 * Request fields default to empty values so that a missing field reaches
 * the validator and comes back as a per-field "x is required" error rather
 * than a body-deserialization rejection.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address (must not already be registered)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted as-is)
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: confirmation message plus the signed session token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub msg: String,
    pub token: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar URL
    pub avatar: String,
}

impl From<crate::auth::users::User> for UserResponse {
    fn from(user: crate::auth::users::User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
        }
    }
}
