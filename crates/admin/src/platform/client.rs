//! HTTP plumbing shared by all back-office Platform API operations.
//!
//! The admin never caches: staff expect to see the current state of the
//! store, and every screen is a fresh read. Timeouts are fixed at client
//! construction.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::PlatformConfig;

use super::{ApiError, ValidationBody};

/// Connect timeout for all Platform API requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout for all Platform API requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Maximum response-body length kept in error messages and logs.
const MAX_ERROR_BODY: usize = 500;

/// Client for the Platform API, staff-token side.
///
/// Cheaply cloneable via `Arc`. One instance per process.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new Platform API client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized, which
    /// only happens in broken build environments.
    #[must_use]
    pub fn new(config: &PlatformConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client with static configuration is valid");

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut builder = self.inner.client.request(method, self.url(path));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// GET a JSON resource.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::GET, path, token)
            .query(query)
            .send()
            .await?;
        decode_response(response).await
    }

    /// POST a JSON body and decode a JSON response.
    pub(super) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        decode_response(response).await
    }

    /// PUT a JSON body and decode a JSON response.
    pub(super) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::PUT, path, token)
            .json(body)
            .send()
            .await?;
        decode_response(response).await
    }

    /// DELETE a resource, ignoring any response body.
    pub(super) async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        let response = self
            .request(reqwest::Method::DELETE, path, token)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// POST a multipart form (file uploads) and decode a JSON response.
    pub(super) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path, token)
            .multipart(form)
            .send()
            .await?;
        decode_response(response).await
    }

    /// Ping the Platform API health endpoint. Used by readiness checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the Platform API is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let response = self.inner.client.get(self.url("/health")).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Normalize an error status into `ApiError`, or return the body text.
async fn check_status(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(1);
        return Err(ApiError::RateLimited(retry_after));
    }

    let path = response.url().path().to_string();
    let body = response.text().await?;

    match status {
        s if s.is_success() => Ok(body),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(path)),
        StatusCode::UNPROCESSABLE_ENTITY => {
            let parsed: ValidationBody = serde_json::from_str(&body)?;
            Err(ApiError::Validation(parsed.errors))
        }
        s => {
            tracing::error!(
                status = %s,
                body = %truncate(&body),
                "Platform API returned unexpected status"
            );
            Err(ApiError::Status {
                status: s.as_u16(),
                body: truncate(&body),
            })
        }
    }
}

/// Decode a JSON response after status normalization.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let body = check_status(response).await?;

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %truncate(&body),
            "Failed to parse Platform API response"
        );
        ApiError::Parse(e)
    })
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}
