//! Cross-Domain Helpers
//!
//! Small pieces used by more than one domain module:
//!
//! - **`idlist`** - ordered lists of id-addressable entries stored inline
//!   on a parent record (likes, experience, education)
//! - **`validate`** - required-field validation for request bodies
//! - **`types`** - response envelopes shared across routes

/// Ordered lists of id-addressable entries
pub mod idlist;

/// Request body validation
pub mod validate;

/// Shared response types
pub mod types;

pub use idlist::HasId;
pub use types::MessageResponse;
pub use validate::Validator;
