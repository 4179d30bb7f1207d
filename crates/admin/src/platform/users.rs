//! Customer account management operations.

use bristle_core::{Page, UserId};

use super::types::CustomerAccount;
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List customer accounts, server-paginated with optional search.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn list_users(
        &self,
        token: &str,
        page: u32,
        search: Option<&str>,
    ) -> Result<Page<CustomerAccount>, ApiError> {
        let mut params = vec![("page", page.to_string())];
        if let Some(q) = search.filter(|s| !s.trim().is_empty()) {
            params.push(("q", q.trim().to_string()));
        }
        self.get_json("/v1/admin/users", &params, Some(token)).await
    }

    /// Fetch one customer account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown ID.
    pub async fn get_user(&self, token: &str, id: UserId) -> Result<CustomerAccount, ApiError> {
        self.get_json(&format!("/v1/admin/users/{id}"), &[], Some(token))
            .await
    }

    /// Delete a customer account. Manager-only; the Platform API enforces
    /// the role server-side as well.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` when the token's role is insufficient.
    pub async fn delete_user(&self, token: &str, id: UserId) -> Result<(), ApiError> {
        self.delete(&format!("/v1/admin/users/{id}"), Some(token))
            .await
    }
}
