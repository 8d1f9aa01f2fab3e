//! Posts and Likes
//!
//! Post records with their embedded `likes` list, the database operations
//! on them, and the HTTP handlers for the `/api/posts` routes.
//!
//! A post snapshots the author's name and avatar at creation time; later
//! profile edits do not rewrite existing posts. The `likes` list holds at
//! most one entry per user, enforced by the handlers, not the storage layer.

/// Post and like types
pub mod types;

/// Database operations for posts
pub mod db;

/// HTTP handlers for posts
pub mod handlers;

pub use types::{Like, Post};
