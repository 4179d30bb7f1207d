//! Product management operations.

use bristle_core::{Page, ProductId};

use super::types::{Category, Product, ProductPayload, ProductQuery};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List products with server-driven pagination and filters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn list_products(
        &self,
        token: &str,
        query: &ProductQuery,
    ) -> Result<Page<Product>, ApiError> {
        self.get_json("/v1/admin/products", &query.to_query(), Some(token))
            .await
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown ID.
    pub async fn get_product(&self, token: &str, id: ProductId) -> Result<Product, ApiError> {
        self.get_json(&format!("/v1/admin/products/{id}"), &[], Some(token))
            .await
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn list_categories(&self, token: &str) -> Result<Vec<Category>, ApiError> {
        self.get_json("/v1/admin/categories", &[], Some(token)).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with field errors on a 422.
    pub async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        self.post_json("/v1/admin/products", payload, Some(token))
            .await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with field errors on a 422.
    pub async fn update_product(
        &self,
        token: &str,
        id: ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        self.put_json(&format!("/v1/admin/products/{id}"), payload, Some(token))
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown ID.
    pub async fn delete_product(&self, token: &str, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/v1/admin/products/{id}"), Some(token))
            .await
    }

    /// Upload a product image; returns the product with the new image URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn upload_product_image(
        &self,
        token: &str,
        id: ProductId,
        filename: String,
        bytes: Vec<u8>,
    ) -> Result<Product, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("image", part);
        self.post_multipart(&format!("/v1/admin/products/{id}/image"), form, Some(token))
            .await
    }

    /// Upload a user-guide PDF; returns the product with the new guide URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn upload_product_guide(
        &self,
        token: &str,
        id: ProductId,
        filename: String,
        bytes: Vec<u8>,
    ) -> Result<Product, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("guide", part);
        self.post_multipart(&format!("/v1/admin/products/{id}/guide"), form, Some(token))
            .await
    }
}
