//! Shared response types

use serde::Serialize;

/// Bare confirmation message, returned by routes that acknowledge an action
/// without echoing a record (registration, deletions, embedded-entry removal).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
