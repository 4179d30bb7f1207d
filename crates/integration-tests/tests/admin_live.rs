//! Live tests against a running admin panel.
//!
//! These tests require:
//! - The admin panel running (cargo run -p bristle-admin)
//! - A reachable Platform API
//!
//! Run with: cargo test -p bristle-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;

use bristle_integration_tests::admin_base_url;

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

#[tokio::test]
#[ignore = "Requires running admin panel and Platform API"]
async fn test_health_endpoints() {
    let base_url = admin_base_url();
    let client = no_redirect_client();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin panel and Platform API"]
async fn test_login_page_renders() {
    let base_url = admin_base_url();
    let client = no_redirect_client();

    let resp = client
        .get(format!("{base_url}/auth/login"))
        .send()
        .await
        .expect("Failed to get login page");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Bristle Admin"));
    assert!(body.contains("name=\"password\""));
}

#[tokio::test]
#[ignore = "Requires running admin panel and Platform API"]
async fn test_dashboard_requires_staff_session() {
    let base_url = admin_base_url();
    let client = no_redirect_client();

    let resp = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get dashboard");
    assert!(resp.status().is_redirection());
    let location = resp.headers().get("location").unwrap().to_str().unwrap();
    assert!(location.starts_with("/auth/login"));
}

#[tokio::test]
#[ignore = "Requires running admin panel and Platform API"]
async fn test_empty_login_shows_field_errors_without_upstream_call() {
    let base_url = admin_base_url();
    let client = no_redirect_client();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("email", ""), ("password", "")])
        .send()
        .await
        .expect("Failed to post login form");

    // Local validation renders the form again, even with the Platform
    // API stopped
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("This field is required"));
}
