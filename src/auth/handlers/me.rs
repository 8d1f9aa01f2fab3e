/**
 * Current User Handler
 *
 * This module implements the handler for GET /api/users/me, which returns
 * the authenticated user's record without sensitive fields.
 *
 * The route sits behind the token authenticator; by the time this handler
 * runs, the identity claim has already been attached to the request.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Current-user handler
///
/// # Errors
///
/// * `401` - handled by the authenticator before this runs
/// * `404` - the user behind the token no longer exists
pub async fn get_me(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, user.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token user no longer exists: {}", user.id);
            ApiError::not_found(StatusCode::NOT_FOUND, "User not found")
        })?;

    Ok(Json(UserResponse::from(user)))
}
