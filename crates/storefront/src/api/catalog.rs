//! Catalog operations: products and categories.

use tracing::{debug, instrument};

use bristle_core::Page;

use super::cache::CacheValue;
use super::types::{Category, Product, ProductQuery};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// List products with server-driven pagination and filters.
    ///
    /// A page number past the end of the result set returns an empty page.
    /// Results are cached for 5 minutes unless the query is a search.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Page<Product>, ApiError> {
        let cache_key = query.cache_key();

        if !query.is_search()
            && let Some(CacheValue::Products(page)) = self.cache().get(&cache_key).await
        {
            debug!("Cache hit for products");
            return Ok(page);
        }

        let page: Page<Product> = self
            .get_json("/v1/products", &query.to_query(), None)
            .await?;

        if !query.is_search() {
            self.cache()
                .insert(cache_key, CacheValue::Products(page.clone()))
                .await;
        }

        Ok(page)
    }

    /// Get a product by its handle.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if no product has this handle.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_product(&self, handle: &str) -> Result<Product, ApiError> {
        let cache_key = format!("product:{handle}");

        if let Some(CacheValue::Product(product)) = self.cache().get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let product: Product = self
            .get_json(
                &format!("/v1/products/{}", urlencoding::encode(handle)),
                &[],
                None,
            )
            .await?;

        self.cache()
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.cache().get(&cache_key).await {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let categories: Vec<Category> = self.get_json("/v1/categories", &[], None).await?;

        self.cache()
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }
}
