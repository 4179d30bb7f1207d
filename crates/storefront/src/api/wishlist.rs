//! Wishlist operations.
//!
//! Both mutations are idempotent from the caller's point of view: adding a
//! product that is already present (409) and removing one that is absent
//! (404) both resolve to the final membership state rather than an error.

use serde::Serialize;
use tracing::instrument;

use bristle_core::ProductId;

use super::types::WishlistEntry;
use super::{ApiClient, ApiError};

#[derive(Serialize)]
struct WishlistAddBody {
    product_id: ProductId,
}

/// Treat "already on the wishlist" (409) as success.
fn absorb_already_present<T>(result: Result<T, ApiError>) -> Result<(), ApiError> {
    match result {
        Ok(_) | Err(ApiError::Status { status: 409, .. }) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Treat "not on the wishlist" (404) as success.
fn absorb_already_absent(result: Result<(), ApiError>) -> Result<(), ApiError> {
    match result {
        Ok(()) | Err(ApiError::NotFound(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

impl ApiClient {
    /// List the customer's wishlist. The endpoint returns the full set.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the token has expired.
    #[instrument(skip(self, token))]
    pub async fn list_wishlist(&self, token: &str) -> Result<Vec<WishlistEntry>, ApiError> {
        self.get_json("/v1/me/wishlist", &[], Some(token)).await
    }

    /// Add a product to the wishlist. Adding a product that is already
    /// present succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error for failures other than "already present".
    #[instrument(skip(self, token), fields(product_id = %product_id))]
    pub async fn add_to_wishlist(
        &self,
        token: &str,
        product_id: ProductId,
    ) -> Result<(), ApiError> {
        let result: Result<serde_json::Value, ApiError> = self
            .post_json("/v1/me/wishlist", &WishlistAddBody { product_id }, Some(token))
            .await;

        absorb_already_present(result)
    }

    /// Remove a product from the wishlist. Removing a product that is not
    /// present succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error for failures other than "not present".
    #[instrument(skip(self, token), fields(product_id = %product_id))]
    pub async fn remove_from_wishlist(
        &self,
        token: &str,
        product_id: ProductId,
    ) -> Result<(), ApiError> {
        let result = self
            .delete(&format!("/v1/me/wishlist/{product_id}"), Some(token))
            .await;

        absorb_already_absent(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_conflict_resolves_to_success() {
        let conflict: Result<serde_json::Value, ApiError> = Err(ApiError::Status {
            status: 409,
            body: "already on wishlist".to_string(),
        });
        assert!(absorb_already_present(conflict).is_ok());

        let created: Result<serde_json::Value, ApiError> = Ok(serde_json::json!({"ok": true}));
        assert!(absorb_already_present(created).is_ok());
    }

    #[test]
    fn test_add_passes_other_errors_through() {
        let expired: Result<serde_json::Value, ApiError> = Err(ApiError::Unauthorized);
        assert!(matches!(
            absorb_already_present(expired),
            Err(ApiError::Unauthorized)
        ));

        let server_error: Result<serde_json::Value, ApiError> = Err(ApiError::Status {
            status: 500,
            body: String::new(),
        });
        assert!(matches!(
            absorb_already_present(server_error),
            Err(ApiError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_remove_missing_resolves_to_success() {
        let missing = Err(ApiError::NotFound("wishlist entry".to_string()));
        assert!(absorb_already_absent(missing).is_ok());

        assert!(absorb_already_absent(Ok(())).is_ok());
    }

    #[test]
    fn test_remove_passes_other_errors_through() {
        let expired = Err(ApiError::Unauthorized);
        assert!(matches!(
            absorb_already_absent(expired),
            Err(ApiError::Unauthorized)
        ));
    }
}
