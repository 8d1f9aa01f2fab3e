//! API Error Module
//!
//! This module defines the error types returned by HTTP handlers and their
//! conversion to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, etc.)
//!
//! # Error Taxonomy
//!
//! - `Validation` - one or more required fields missing or empty
//! - `Unauthenticated` - no credential presented, or credentials rejected
//! - `InvalidToken` - a token was presented but failed verification
//! - `NotFound` - user/profile/post/entry absent
//! - `Conflict` - the requested change already holds (duplicate email,
//!   already-liked post, existing profile)
//! - `Server` - unexpected persistence or runtime fault
//!
//! Several variants carry their own `StatusCode` because the API maps the
//! same failure kind to different statuses depending on the route (a missing
//! post is a 400, a missing profile a 404).
//!
//! # HTTP Response Conversion
//!
//! All errors implement `IntoResponse` from Axum, so handlers can return
//! them directly. Unexpected faults are logged and collapsed to a generic
//! server-error body; internal detail never reaches the caller.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, FieldError};
