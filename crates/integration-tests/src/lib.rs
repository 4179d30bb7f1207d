//! Integration tests for Bristle.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests (discount math, pagination properties)
//! cargo test -p bristle-integration-tests
//!
//! # Live tests against running services
//! cargo test -p bristle-integration-tests -- --ignored
//! ```
//!
//! Live tests expect the storefront on port 3000, the admin panel on
//! port 3001, and a reachable Platform API. URLs can be overridden with
//! `STOREFRONT_BASE_URL` and `ADMIN_BASE_URL`.

use reqwest::Client;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Client with a cookie store, for session-based flows.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
