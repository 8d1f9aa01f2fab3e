//! Database operations for posts
//!
//! Posts keep their `likes` list as a JSONB column read and written whole.
//! Like mutations are a read-modify-write: the handler loads the post,
//! splices the list in memory, and `update_likes` persists the result.
//! Nothing here takes a row lock or does a conditional update, so two
//! concurrent mutations of the same post can lose one of the writes.

use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::posts::types::{Like, Post};

fn post_from_row(row: &PgRow) -> Post {
    Post {
        id: row.get("id"),
        user: row.get("user_id"),
        text: row.get("text"),
        image: row.get("image"),
        name: row.get("name"),
        avatar: row.get("avatar"),
        likes: row.get::<Json<Vec<Like>>, _>("likes").0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create a new post with the author snapshot taken at creation time.
pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    text: &str,
    image: &str,
    name: &str,
    avatar: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, user_id, text, image, name, avatar, likes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, '[]'::jsonb, $7, $8)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(text)
    .bind(image)
    .bind(name)
    .bind(avatar)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Post {
        id,
        user: user_id,
        text: text.to_string(),
        image: image.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        likes: Vec::new(),
        created_at: now,
        updated_at: now,
    })
}

/// Get all posts, newest first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, user_id, text, image, name, avatar, likes, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(post_from_row).collect())
}

/// Get a post by ID
pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, user_id, text, image, name, avatar, likes, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(post_from_row))
}

/// Delete a post by ID
///
/// Returns the number of rows removed (0 when the post did not exist).
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Persist a post's full like list, returning the updated post.
pub async fn update_likes(
    pool: &PgPool,
    post_id: Uuid,
    likes: &[Like],
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    let row = sqlx::query(
        r#"
        UPDATE posts
        SET likes = $1, updated_at = $2
        WHERE id = $3
        RETURNING id, user_id, text, image, name, avatar, likes, created_at, updated_at
        "#,
    )
    .bind(Json(likes))
    .bind(now)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(post_from_row(&row))
}
