//! Authentication and User Management
//!
//! This module covers everything identity-related:
//!
//! - **`users`** - the user record and its database operations
//! - **`sessions`** - JWT issuing and verification
//! - **`avatar`** - deterministic avatar URL derivation from an email
//! - **`handlers`** - registration, login and current-user handlers

/// User model and database operations
pub mod users;

/// Session management and JWT tokens
pub mod sessions;

/// Avatar URL derivation
pub mod avatar;

/// HTTP handlers for authentication
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{Claims, SessionKeys};
pub use users::User;
