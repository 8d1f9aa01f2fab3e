//! DevConnect - Main Library
//!
//! DevConnect is a social-networking backend built with Rust. It exposes a
//! JSON REST API for user registration and login, developer profiles with
//! experience/education history and social links, and posts with like/unlike.
//!
//! # Overview
//!
//! This library provides the core functionality for DevConnect, including:
//! - Axum HTTP server with token-based authentication middleware
//! - PostgreSQL persistence via sqlx (profiles and posts keep their
//!   embedded lists as JSONB documents)
//! - bcrypt password hashing and JWT session tokens
//! - Structured JSON error responses
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, sessions (JWT), registration/login handlers
//! - **`posts`** - Post records, like/unlike, post handlers
//! - **`profiles`** - Profile records, experience/education lists, handlers
//! - **`middleware`** - Token authentication middleware
//! - **`error`** - API error types and HTTP response conversion
//! - **`shared`** - Cross-domain helpers (id-addressable lists, validation)

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Posts and likes
pub mod posts;

/// Developer profiles with experience/education history
pub mod profiles;

/// Middleware for request processing
pub mod middleware;

/// API error types
pub mod error;

/// Cross-domain helpers
pub mod shared;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
