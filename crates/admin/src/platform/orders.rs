//! Order management operations.
//!
//! Status transitions are requests: the Platform API may refuse one (a
//! delivered order cannot go back to processing) and the handler re-renders
//! whatever the server answered.

use serde::Serialize;

use bristle_core::{OrderId, OrderStatus, Page};

use super::types::{Order, OrderQuery};
use super::{ApiClient, ApiError};

#[derive(Serialize)]
struct StatusBody {
    status: OrderStatus,
}

impl ApiClient {
    /// List orders with server-driven pagination and filters.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn list_orders(
        &self,
        token: &str,
        query: &OrderQuery,
    ) -> Result<Page<Order>, ApiError> {
        self.get_json("/v1/admin/orders", &query.to_query(), Some(token))
            .await
    }

    /// Fetch one order with its line items and computed totals.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown ID.
    pub async fn get_order(&self, token: &str, id: OrderId) -> Result<Order, ApiError> {
        self.get_json(&format!("/v1/admin/orders/{id}"), &[], Some(token))
            .await
    }

    /// Request a status transition. Returns the order as the server now
    /// sees it, which may or may not carry the requested status.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the server refuses the
    /// transition.
    pub async fn request_order_status(
        &self,
        token: &str,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.put_json(
            &format!("/v1/admin/orders/{id}/status"),
            &StatusBody { status },
            Some(token),
        )
        .await
    }
}
