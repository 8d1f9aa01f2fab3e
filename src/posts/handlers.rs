/**
 * Post Handlers
 *
 * HTTP handlers for the post routes. All of them sit behind the token
 * authenticator.
 *
 * # Routes
 *
 * - `POST /api/posts` - create a post (author snapshot taken here)
 * - `GET /api/posts` - list all posts, newest first
 * - `GET /api/posts/{post_id}` - fetch one post
 * - `DELETE /api/posts/{post_id}` - delete a post
 * - `PUT /api/posts/like/{post_id}` - like (rejects a second like)
 * - `PUT /api/posts/unlike/{post_id}` - unlike (rejects if not liked)
 *
 * Like and unlike are the idempotent set-membership mutation: scan the
 * embedded list for the caller's id, then either reject without mutating
 * or splice and persist. The absent-post failure on these routes is a 400,
 * not a 404.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db;
use crate::posts::types::{CreatePostRequest, CreatePostResponse, Like, PostResponse, PostsResponse};
use crate::shared::idlist::{find_by_id, insert_front, remove_by_id};
use crate::shared::{MessageResponse, Validator};

/// Create a post
///
/// The author's name and avatar are copied onto the post at creation and
/// intentionally never synced with later profile edits.
pub async fn create_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<CreatePostResponse>, ApiError> {
    Validator::new()
        .require("text", "Text", &request.text)
        .require("image", "Image", &request.image)
        .finish(StatusCode::BAD_REQUEST)?;

    let author = get_user_by_id(&pool, user.id).await?.ok_or_else(|| {
        tracing::warn!("Post author not found: {}", user.id);
        ApiError::not_found(StatusCode::BAD_REQUEST, "User not found")
    })?;

    let post = db::create_post(
        &pool,
        author.id,
        &request.text,
        &request.image,
        &author.name,
        &author.avatar,
    )
    .await?;

    tracing::info!("Post created: {} by {}", post.id, author.email);

    Ok(Json(CreatePostResponse {
        msg: "Post is created".to_string(),
        post,
    }))
}

/// Get all posts
pub async fn list_posts(State(pool): State<PgPool>) -> Result<Json<PostsResponse>, ApiError> {
    let posts = db::list_posts(&pool).await?;
    Ok(Json(PostsResponse { posts }))
}

/// Get a post by id
pub async fn get_post(
    State(pool): State<PgPool>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = db::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, "Post id is not found"))?;

    Ok(Json(PostResponse { post }))
}

/// Delete a post by id
pub async fn delete_post(
    State(pool): State<PgPool>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    if db::get_post(&pool, post_id).await?.is_none() {
        return Err(ApiError::not_found(StatusCode::BAD_REQUEST, "Post Id not found"));
    }

    db::delete_post(&pool, post_id).await?;

    tracing::info!("Post deleted: {}", post_id);

    Ok(Json(MessageResponse::new("Post Id deleted Successfully")))
}

/// Like a post
///
/// Rejects without mutating when the caller already appears in the list;
/// otherwise the new entry is prepended, keeping likes most-recent-first.
pub async fn like_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let mut post = db::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, "No Post Found"))?;

    if find_by_id(&post.likes, &user.id).is_some() {
        return Err(ApiError::conflict(
            StatusCode::BAD_REQUEST,
            "Post has been already added",
        ));
    }

    insert_front(&mut post.likes, Like { user: user.id });
    let post = db::update_likes(&pool, post_id, &post.likes).await?;

    Ok(Json(PostResponse { post }))
}

/// Unlike a post
///
/// Rejects without mutating when the caller never liked the post;
/// otherwise that single entry is removed by position.
pub async fn unlike_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let mut post = db::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found(StatusCode::BAD_REQUEST, "Post Id is not found"))?;

    if remove_by_id(&mut post.likes, &user.id).is_none() {
        return Err(ApiError::not_found(
            StatusCode::BAD_REQUEST,
            "Post has not been liked",
        ));
    }

    let post = db::update_likes(&pool, post_id, &post.likes).await?;

    Ok(Json(PostResponse { post }))
}
