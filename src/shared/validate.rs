/**
 * Request Body Validation
 *
 * Required-field checks run before any business logic or persistence
 * access. Request structs default missing fields to empty values, so a
 * missing field and an empty one produce the same per-field error.
 *
 * Each check takes the field's wire name and its display label separately:
 * the messages are part of the contract and their casing varies by route
 * ("name is required" on registration, "Text is required" on posts).
 *
 * The rejection status is supplied by the caller: registration and login
 * reject invalid bodies with 401, every other route with 400.
 */

use axum::http::StatusCode;

use crate::error::{ApiError, FieldError};

/// Accumulates field-level validation errors for one request.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-empty string field.
    pub fn require(mut self, param: &'static str, label: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::required(param, label));
        }
        self
    }

    /// Require a non-empty list field.
    pub fn require_list<T>(mut self, param: &'static str, label: &str, values: &[T]) -> Self {
        if values.is_empty() {
            self.errors.push(FieldError::required(param, label));
        }
        self
    }

    /// Finish validation, rejecting with the given status if any field failed.
    pub fn finish(self, status: StatusCode) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation(status, self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_present() {
        let result = Validator::new()
            .require("name", "name", "A")
            .require("email", "email", "a@x.com")
            .require("password", "password", "p")
            .finish(StatusCode::UNAUTHORIZED);
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_fields_collected_in_order() {
        let result = Validator::new()
            .require("name", "name", "")
            .require("email", "email", "a@x.com")
            .require("password", "password", "   ")
            .finish(StatusCode::UNAUTHORIZED);

        match result.unwrap_err() {
            ApiError::Validation { status, errors } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].param, "name");
                assert_eq!(errors[1].param, "password");
                assert_eq!(errors[1].msg, "password is required");
            }
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_label_drives_the_message() {
        let result = Validator::new()
            .require("githubUsername", "GitHub Username", "")
            .finish(StatusCode::BAD_REQUEST);

        match result.unwrap_err() {
            ApiError::Validation { errors, .. } => {
                assert_eq!(errors[0].msg, "GitHub Username is required");
                assert_eq!(errors[0].param, "githubUsername");
            }
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let skills: Vec<String> = Vec::new();
        let result = Validator::new()
            .require_list("skills", "Skills", &skills)
            .finish(StatusCode::BAD_REQUEST);
        assert!(result.is_err());
    }
}
