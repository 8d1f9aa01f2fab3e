//! Developer Profiles
//!
//! Profile records with their embedded experience/education lists and
//! social links, the database operations on them, and the HTTP handlers
//! for the `/api/profiles` routes.
//!
//! A profile belongs to exactly one user (application convention; the
//! storage layer enforces nothing). Experience and education entries carry
//! their own generated ids so they stay addressable regardless of where
//! they sit in the list.

/// Profile, experience, education and social types
pub mod types;

/// Database operations for profiles
pub mod db;

/// HTTP handlers for profiles
pub mod handlers;

pub use types::{Education, Experience, Profile, Social};
