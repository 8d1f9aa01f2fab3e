/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/users/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a JWT embedding the user's id and name
 *
 * # Security
 *
 * An unknown email and a wrong password return the same 401 body, so a
 * caller cannot tell which of the two fields was wrong. Passwords are never
 * logged or returned.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::sessions::SessionKeys;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::shared::Validator;

/// Login handler
///
/// # Errors
///
/// * `401` - missing/empty field, unknown email, or wrong password
///   (the latter two indistinguishable)
/// * `500` - persistence or token-signing fault
pub async fn login(
    State(pool): State<PgPool>,
    State(keys): State<SessionKeys>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    Validator::new()
        .require("email", "Email", &request.email)
        .require("password", "Password", &request.password)
        .finish(StatusCode::UNAUTHORIZED)?;

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login rejected, unknown email: {}", request.email);
            ApiError::unauthenticated("Invalid Credentials")
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login rejected, wrong password for: {}", user.email);
        return Err(ApiError::unauthenticated("Invalid Credentials"));
    }

    let token = keys.issue(user.id, &user.name).map_err(|e| {
        tracing::error!("Failed to sign token: {:?}", e);
        ApiError::server()
    })?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    Ok(Json(LoginResponse {
        msg: "Login Success".to_string(),
        token,
    }))
}
