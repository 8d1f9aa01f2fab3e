/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors, allowing
 * them to be returned directly from Axum handlers.
 *
 * # Response Format
 *
 * Two body shapes exist, matching the wire contract:
 *
 * - Token authenticator failures: `{"msg": "..."}`
 * - Everything else: `{"errors": [{"msg": "...", "param": "..."}]}`
 *   (`param` only on validation errors)
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            // The authenticator replies with a bare message object
            ApiError::Unauthenticated { message } => json!({ "msg": message }),
            ApiError::InvalidToken => json!({ "msg": self.to_string() }),

            ApiError::Validation { errors, .. } => json!({ "errors": errors }),

            ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Server { message } => {
                json!({ "errors": [{ "msg": message }] })
            }
        };

        (status, Json(body)).into_response()
    }
}
