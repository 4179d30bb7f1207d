//! Platform API client for the admin panel.
//!
//! Every back-office operation goes through the Platform API with a staff
//! bearer token; the admin process keeps no authoritative state of its own.

mod client;
mod orders;
mod products;
mod reports;
mod staff;
pub mod types;
mod users;

pub use client::ApiClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field-level validation error from the Platform API (HTTP 422).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Body shape of a 422 response.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationBody {
    pub errors: Vec<FieldError>,
}

/// Errors from Platform API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connect, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 401: the token is missing, expired, or revoked.
    #[error("Unauthorized")]
    Unauthorized,

    /// HTTP 403: the token is valid but the role forbids the operation.
    #[error("Forbidden")]
    Forbidden,

    /// HTTP 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 422 with structured field errors.
    #[error("Validation failed: {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// HTTP 429 with the Retry-After value in seconds.
    #[error("Rate limited, retry after {0}s")]
    RateLimited(u64),

    /// Any other non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
