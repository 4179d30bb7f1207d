//! Cart operations.
//!
//! Every mutation returns the full server-computed cart (subtotal, discount,
//! tax, shipping, total); the caller re-renders from that response and never
//! computes totals locally.

use serde::Serialize;
use tracing::instrument;

use bristle_core::{CartItemId, ProductId};

use super::types::Cart;
use super::{ApiClient, ApiError};

#[derive(Serialize)]
struct AddItemBody {
    product_id: ProductId,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateItemBody {
    quantity: u32,
}

impl ApiClient {
    /// Fetch a cart by its ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the cart has expired server-side.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn get_cart(&self, cart_id: &str) -> Result<Cart, ApiError> {
        self.get_json(&format!("/v1/carts/{cart_id}"), &[], None)
            .await
    }

    /// Create a new cart containing one item.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or stock is insufficient.
    #[instrument(skip(self))]
    pub async fn create_cart(&self, product_id: ProductId, quantity: u32) -> Result<Cart, ApiError> {
        self.post_json(
            "/v1/carts",
            &AddItemBody {
                product_id,
                quantity,
            },
            None,
        )
        .await
    }

    /// Add an item to an existing cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or stock is insufficient.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn add_item(
        &self,
        cart_id: &str,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        self.post_json(
            &format!("/v1/carts/{cart_id}/items"),
            &AddItemBody {
                product_id,
                quantity,
            },
            None,
        )
        .await
    }

    /// Set the quantity of a cart line.
    ///
    /// Callers must not issue this for quantities below 1; removal is a
    /// separate operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or stock is insufficient.
    #[instrument(skip(self), fields(cart_id = %cart_id, item_id = %item_id))]
    pub async fn update_item(
        &self,
        cart_id: &str,
        item_id: CartItemId,
        quantity: u32,
    ) -> Result<Cart, ApiError> {
        self.put_json(
            &format!("/v1/carts/{cart_id}/items/{item_id}"),
            &UpdateItemBody { quantity },
            None,
        )
        .await
    }

    /// Remove a cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id, item_id = %item_id))]
    pub async fn remove_item(&self, cart_id: &str, item_id: CartItemId) -> Result<Cart, ApiError> {
        // The server responds with the updated cart
        self.delete_json(&format!("/v1/carts/{cart_id}/items/{item_id}"), None)
            .await
    }
}
