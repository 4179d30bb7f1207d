//! Staff bootstrap command.
//!
//! # Usage
//!
//! ```bash
//! bristle staff create -e ops@example.com -n "Ops Person" -r manager
//! ```
//!
//! # Environment Variables
//!
//! - `PLATFORM_API_URL` - Base URL of the Platform API
//! - `PLATFORM_SERVICE_TOKEN` - Service token authorized for staff creation

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bristle_core::{Email, StaffRole};

/// Errors that can occur during staff operations.
#[derive(Debug, Error)]
pub enum StaffError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: manager, staff, viewer")]
    InvalidRole(String),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Network error talking to the Platform API.
    #[error("Platform API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Platform API refused the request.
    #[error("Platform API returned {status}: {body}")]
    Refused {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Serialize)]
struct StaffPayload<'a> {
    email: &'a str,
    name: &'a str,
    role: StaffRole,
}

#[derive(Deserialize)]
struct CreatedStaff {
    id: i64,
    email: String,
    role: StaffRole,
}

/// Create a new staff account through the Platform API.
///
/// The Platform API sends the invitation email; no password is handled
/// here.
///
/// # Errors
///
/// Returns `StaffError` for invalid input, missing env vars, or a refusal
/// from the Platform API.
pub async fn create(email: &str, name: &str, role: &str) -> Result<i64, StaffError> {
    dotenvy::dotenv().ok();

    let role: StaffRole = role
        .parse()
        .map_err(|_| StaffError::InvalidRole(role.to_owned()))?;

    let email =
        Email::parse(email).map_err(|_| StaffError::InvalidEmail(email.to_owned()))?;

    let api_url = std::env::var("PLATFORM_API_URL")
        .map_err(|_| StaffError::MissingEnvVar("PLATFORM_API_URL"))?;
    let token = std::env::var("PLATFORM_SERVICE_TOKEN")
        .map_err(|_| StaffError::MissingEnvVar("PLATFORM_SERVICE_TOKEN"))?;

    tracing::info!("Creating staff account: {} ({})", email, role);

    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(15))
        .build()?;

    let response = client
        .post(format!("{}/v1/admin/staff", api_url.trim_end_matches('/')))
        .bearer_auth(&token)
        .json(&StaffPayload {
            email: email.as_str(),
            name,
            role,
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(StaffError::Refused { status, body });
    }

    let created: CreatedStaff = response.json().await?;

    tracing::info!(
        "Staff account created! ID: {}, Email: {}, Role: {}",
        created.id,
        created.email,
        created.role
    );
    tracing::info!("The Platform API has sent the invitation email.");

    Ok(created.id)
}
