//! Unified error handling with Sentry integration.
//!
//! 401 handling is centralized here: any `ApiError::Unauthorized` from a
//! Platform API call converts to `AppError::SessionExpired`, which clears
//! the staff session by redirecting through the login page. No call site
//! inspects 401 itself.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::platform::ApiError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Platform API operation failed (excluding 401, which becomes
    /// `SessionExpired`).
    #[error("Platform API error: {0}")]
    Api(ApiError),

    /// The staff bearer token was rejected.
    #[error("Session expired")]
    SessionExpired,

    /// The staff role does not permit this operation.
    #[error("Forbidden")]
    Forbidden,

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Self::SessionExpired,
            ApiError::Forbidden => Self::Forbidden,
            ApiError::NotFound(what) => Self::NotFound(what),
            other => Self::Api(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            Self::Api(_) | Self::Session(_) | Self::Template(_) | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match self {
            Self::SessionExpired => {
                Redirect::to("/auth/login?session=expired").into_response()
            }
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Your role does not permit this action".to_string(),
            )
                .into_response(),
            Self::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Not found".to_string()).into_response()
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Api(ApiError::RateLimited(_)) => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests, please retry shortly".to_string(),
            )
                .into_response(),
            Self::Api(ApiError::Validation(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed".to_string(),
            )
                .into_response(),
            Self::Api(_) => (
                StatusCode::BAD_GATEWAY,
                "External service error".to_string(),
            )
                .into_response(),
            Self::Session(_) | Self::Template(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_becomes_session_expired() {
        let err = AppError::from(ApiError::Unauthorized);
        assert!(matches!(err, AppError::SessionExpired));
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let err = AppError::from(ApiError::Forbidden);
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_session_expired_redirects_to_login() {
        let response = AppError::SessionExpired.into_response();
        assert!(response.status().is_redirection());
    }
}
