//! Environment and connectivity check.
//!
//! # Usage
//!
//! ```bash
//! bristle check
//! ```
//!
//! Verifies that the environment variables both services need are present
//! and that the Platform API answers its health endpoint.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during the check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// One or more required environment variables are missing.
    #[error("{0} required environment variable(s) missing")]
    MissingEnvVars(usize),

    /// The Platform API could not be reached.
    #[error("Platform API unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// The Platform API answered with a non-success status.
    #[error("Platform API health check returned {0}")]
    Unhealthy(reqwest::StatusCode),
}

const STOREFRONT_VARS: &[&str] = &["STOREFRONT_BASE_URL", "STOREFRONT_SESSION_SECRET"];
const ADMIN_VARS: &[&str] = &["ADMIN_BASE_URL", "ADMIN_SESSION_SECRET"];
const SHARED_VARS: &[&str] = &["PLATFORM_API_URL"];

/// Run the environment and connectivity check.
///
/// # Errors
///
/// Returns `CheckError` when env vars are missing or the Platform API does
/// not answer.
pub async fn run() -> Result<(), CheckError> {
    dotenvy::dotenv().ok();

    let mut missing = 0;
    for (group, vars) in [
        ("shared", SHARED_VARS),
        ("storefront", STOREFRONT_VARS),
        ("admin", ADMIN_VARS),
    ] {
        for var in vars {
            if std::env::var(var).is_ok() {
                tracing::info!("[{group}] {var} is set");
            } else {
                tracing::error!("[{group}] {var} is MISSING");
                missing += 1;
            }
        }
    }

    if missing > 0 {
        return Err(CheckError::MissingEnvVars(missing));
    }

    // Unwrap is safe: checked above
    #[allow(clippy::unwrap_used)]
    let api_url = std::env::var("PLATFORM_API_URL").unwrap();
    let health_url = format!("{}/health", api_url.trim_end_matches('/'));

    tracing::info!("Pinging {health_url}");
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(10))
        .build()?;

    let response = client.get(&health_url).send().await?;
    if !response.status().is_success() {
        return Err(CheckError::Unhealthy(response.status()));
    }

    tracing::info!("Platform API is healthy");
    Ok(())
}
