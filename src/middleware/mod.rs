//! Middleware for request processing

/// Token authentication middleware
pub mod auth;

pub use auth::{authenticate, AuthUser, AuthenticatedUser};
