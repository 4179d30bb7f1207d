//! Customer account operations: auth, profile, orders, checkout.

use serde::Serialize;
use tracing::instrument;

use bristle_core::{OrderId, Page};

use super::types::{AuthSession, CheckoutPayload, Customer, Order, ProfileUpdate};
use super::{ApiClient, ApiError};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Registration<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` on bad credentials.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        self.post_json("/v1/auth/login", &Credentials { email, password }, None)
            .await
    }

    /// Register a new customer account and log it in.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the email is taken or the
    /// password is rejected.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSession, ApiError> {
        self.post_json(
            "/v1/auth/register",
            &Registration {
                email,
                password,
                name,
            },
            None,
        )
        .await
    }

    /// Invalidate a token server-side. Best-effort: callers clear the
    /// session regardless of the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.delete("/v1/auth/session", Some(token)).await
    }

    /// Fetch the logged-in customer's profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the token has expired.
    #[instrument(skip(self, token))]
    pub async fn get_profile(&self, token: &str) -> Result<Customer, ApiError> {
        self.get_json("/v1/me", &[], Some(token)).await
    }

    /// Update the logged-in customer's profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on rejected fields.
    #[instrument(skip(self, token))]
    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<Customer, ApiError> {
        self.put_json("/v1/me", update, Some(token)).await
    }

    /// Upload a profile picture (multipart).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token, bytes))]
    pub async fn upload_profile_picture(
        &self,
        token: &str,
        filename: String,
        bytes: Vec<u8>,
    ) -> Result<Customer, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("picture", part);
        self.post_multipart("/v1/me/picture", form, Some(token))
            .await
    }

    /// List the customer's orders, newest first, server-paginated.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn list_orders(&self, token: &str, page: u32) -> Result<Page<Order>, ApiError> {
        self.get_json(
            "/v1/me/orders",
            &[("page", page.max(1).to_string())],
            Some(token),
        )
        .await
    }

    /// Fetch one of the customer's orders.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the order does not belong to the
    /// customer.
    #[instrument(skip(self, token), fields(order_id = %order_id))]
    pub async fn get_order(&self, token: &str, order_id: OrderId) -> Result<Order, ApiError> {
        self.get_json(&format!("/v1/me/orders/{order_id}"), &[], Some(token))
            .await
    }

    /// Place an order. Posted exactly once per successful checkout
    /// submission; guest checkout passes no token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` on rejected address fields and other
    /// errors on stock or payment refusal.
    #[instrument(skip(self, token, payload))]
    pub async fn place_order(
        &self,
        token: Option<&str>,
        payload: &CheckoutPayload,
    ) -> Result<Order, ApiError> {
        self.post_json("/v1/orders", payload, token).await
    }
}
