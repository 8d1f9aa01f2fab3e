/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 *
 * The signing secret is process-wide configuration, loaded once at startup
 * into `SessionKeys` and passed to whoever needs it through application
 * state - nothing in here reads the environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Tokens expire 30 days after issue.
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
///
/// The identity claim embeds the user's id and display name; the
/// authenticator attaches both to the request context on success.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Display name
    pub name: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// HS256 signing and verification keys derived from the configured secret.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionKeys {
    /// Build both keys from the shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token embedding the user's id and name.
    pub fn issue(&self, user_id: Uuid, name: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry, returning the decoded claims.
    ///
    /// Callers collapse every failure here - tampered signature, malformed
    /// input, expired claim - into the same rejection.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> SessionKeys {
        SessionKeys::new("test-secret")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user_id = Uuid::new_v4();
        let token = keys().issue(user_id, "Ada").unwrap();

        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.name, "Ada");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(keys().verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = keys().issue(Uuid::new_v4(), "Ada").unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(keys().verify(&tampered).is_err());
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let token = SessionKeys::new("other-secret")
            .issue(Uuid::new_v4(), "Ada")
            .unwrap();
        assert!(keys().verify(&token).is_err());
    }
}
