/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies the JWT from the
 * `x-auth-token` header and provides the caller's identity to handlers.
 *
 * # Contract
 *
 * - No token present: 401 `{"msg": "No Token, Authentication Denied"}`
 * - Token fails verification (tampered, malformed, expired): 401
 *   `{"msg": "Token is not valid"}` - every failure collapses to this one
 * - Valid token: the decoded identity claim is attached to request
 *   extensions and the pipeline continues
 *
 * The middleware never touches the database; rejection happens before any
 * persistence access.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::SessionKeys;
use crate::error::ApiError;

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user data extracted from the JWT identity claim
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `x-auth-token` header
/// 2. Verifies the token signature and expiry
/// 3. Attaches the decoded identity to request extensions for handlers
///
/// Returns 401 if the token is missing or invalid.
pub async fn authenticate(
    State(keys): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing {} header", TOKEN_HEADER);
            ApiError::unauthenticated("No Token, Authentication Denied")
        })?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::InvalidToken
    })?;

    // A well-formed signature over a non-UUID subject is still not a valid
    // token for this API.
    let id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id,
        name: claims.name,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to pull the identity the middleware attached
/// to request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthenticated("No Token, Authentication Denied")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extract_authenticated_user() {
        let mut request = Request::builder().uri("http://example.com").body(()).unwrap();

        let user = AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
        };
        request.extensions_mut().insert(user.clone());

        let (mut parts, _) = request.into_parts();
        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(extracted.is_ok());
        assert_eq!(extracted.unwrap().0.id, user.id);
    }

    #[tokio::test]
    async fn test_extract_authenticated_user_missing() {
        let request = Request::builder().uri("http://example.com").body(()).unwrap();

        let (mut parts, _) = request.into_parts();
        let extracted = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(extracted.is_err());
    }
}
