//! Platform API client.
//!
//! The Platform API is the single external boundary: REST over HTTPS with
//! JSON bodies, multipart for file uploads, and bearer-token auth. All
//! authoritative computation (pricing, discounts, stock, order state)
//! happens there; this module only transports and decodes.

mod cache;
mod cart;
mod catalog;
mod client;
mod customer;
pub mod types;
mod wishlist;

pub use client::ApiClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field-level validation error, as returned by the Platform API in
/// HTTP 422 responses and produced by local form validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field name.
    pub field: String,
    /// Human-readable message for inline display.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body shape of a Platform API 422 response.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationBody {
    pub errors: Vec<FieldError>,
}

/// Errors from Platform API operations.
///
/// Every HTTP failure mode is normalized here so call sites never inspect
/// raw status codes. There is no retry or backoff; failures surface to the
/// caller on the first attempt.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 401. Handled centrally by `AppError`, never at call sites.
    #[error("Unauthorized")]
    Unauthorized,

    /// HTTP 403.
    #[error("Forbidden")]
    Forbidden,

    /// HTTP 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 422 with structured field errors.
    #[error("Validation failed: {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// HTTP 429 with Retry-After seconds.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Any other non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// Malformed response body.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_deserialize() {
        let body: ValidationBody = serde_json::from_str(
            r#"{"errors":[{"field":"email","message":"is already taken"}]}"#,
        )
        .unwrap();
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].field, "email");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("product beard-oil".to_string());
        assert_eq!(err.to_string(), "Not found: product beard-oil");

        let err = ApiError::Validation(vec![FieldError::new("email", "required")]);
        assert_eq!(err.to_string(), "Validation failed: 1 field(s)");
    }
}
