/**
 * API Error Types
 *
 * This module defines the error types used by HTTP handlers. Each variant
 * knows its HTTP status code and its JSON body shape, so handlers propagate
 * errors with `?` and let the conversion layer render them.
 *
 * # Status Codes
 *
 * The status code is part of the error where it varies by route:
 * a post that does not exist is rejected with 400, a profile that does
 * not exist with 404, a duplicate registration with 401 and a duplicate
 * like with 400. Variants that always map to one status (authentication,
 * server faults) carry none.
 */

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure.
///
/// Serialized into the `errors` array of a validation response, e.g.
/// `{"msg": "name is required", "param": "name"}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// Human-readable message
    pub msg: String,
    /// Name of the offending request field
    pub param: &'static str,
}

impl FieldError {
    /// Build the standard "<label> is required" error for an empty field.
    ///
    /// `param` is the wire name of the field; `label` is the display name
    /// used in the message (routes are not consistent about casing, and the
    /// exact strings are part of the contract).
    pub fn required(param: &'static str, label: &str) -> Self {
        Self {
            msg: format!("{label} is required"),
            param,
        }
    }
}

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more required request fields are missing or empty.
    ///
    /// Registration and login reject validation failures with 401,
    /// every other route with 400, so the status travels with the error.
    #[error("validation failed on {} field(s)", .errors.len())]
    Validation {
        status: StatusCode,
        errors: Vec<FieldError>,
    },

    /// No credential presented, or the presented credentials were rejected.
    #[error("{message}")]
    Unauthenticated { message: String },

    /// A token was presented but failed verification.
    ///
    /// Every verification failure collapses here - bad signature, garbage
    /// input, expired claim. The caller cannot tell them apart.
    #[error("Token is not valid")]
    InvalidToken,

    /// The addressed record (or embedded entry) does not exist.
    #[error("{message}")]
    NotFound {
        status: StatusCode,
        message: String,
    },

    /// The requested change already holds.
    #[error("{message}")]
    Conflict {
        status: StatusCode,
        message: String,
    },

    /// Unexpected persistence or runtime fault. The message is the generic
    /// body sent to the caller; the underlying fault is only logged.
    #[error("{message}")]
    Server { message: String },
}

impl ApiError {
    /// Create a validation error with the given status and field errors.
    pub fn validation(status: StatusCode, errors: Vec<FieldError>) -> Self {
        Self::Validation { status, errors }
    }

    /// Create an authentication failure with a caller-visible message.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a not-found error with the status the route contract expects.
    pub fn not_found(status: StatusCode, message: impl Into<String>) -> Self {
        Self::NotFound {
            status,
            message: message.into(),
        }
    }

    /// Create a conflict error with the status the route contract expects.
    pub fn conflict(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Conflict {
            status,
            message: message.into(),
        }
    }

    /// Create a generic server error.
    pub fn server() -> Self {
        Self::Server {
            message: "Server Error".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotFound { status, .. } => *status,
            Self::Conflict { status, .. } => *status,
            Self::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    /// Collapse any persistence fault into a generic server error.
    ///
    /// The fault is logged at error level; callers only ever see
    /// "Server Error".
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        Self::server()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization error: {:?}", err);
        Self::server()
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        Self::server()
    }
}
