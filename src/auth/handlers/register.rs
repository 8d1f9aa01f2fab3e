/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/users/register.
 *
 * # Registration Process
 *
 * 1. Validate that name, email and password are present
 * 2. Check no user already holds the email
 * 3. Hash the password with bcrypt
 * 4. Derive the avatar URL from the email
 * 5. Insert the user
 *
 * Registration does not log the user in; the response is a bare
 * confirmation message and the client follows up with a login request.
 *
 * # Failure Modes
 *
 * This route rejects validation failures and duplicate emails with 401,
 * unlike the rest of the API which uses 400 for validation.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::avatar::avatar_url;
use crate::auth::handlers::types::RegisterRequest;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::shared::{MessageResponse, Validator};

/// Registration handler
///
/// # Errors
///
/// * `401` - missing/empty field, or email already registered
/// * `500` - hashing or persistence fault
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    Validator::new()
        .require("name", "name", &request.name)
        .require("email", "email", &request.email)
        .require("password", "password", &request.password)
        .finish(StatusCode::UNAUTHORIZED)?;

    // Check the email is not already taken
    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", request.email);
        return Err(ApiError::conflict(
            StatusCode::UNAUTHORIZED,
            "User already exists",
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let avatar = avatar_url(&request.email);

    let user = create_user(&pool, request.name, request.email, password_hash, avatar).await?;

    tracing::info!("User registered: {} ({})", user.name, user.email);

    Ok(Json(MessageResponse::new("Registration is successful")))
}
