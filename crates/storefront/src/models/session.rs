//! Session-related types.
//!
//! Types stored in the session under fixed keys: the customer identity, the
//! Platform API bearer token, the cart ID, and the checkout-wizard marker.

use serde::{Deserialize, Serialize};

use bristle_core::{Email, OrderId, UserId};

/// Session-stored customer identity.
///
/// Minimal data stored in the session to identify the logged-in customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentCustomer {
    /// Customer's Platform API ID.
    pub id: UserId,
    /// Customer's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
}

/// Platform API bearer token held in the session.
///
/// `Debug` is redacted so the token never reaches logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw token for the `Authorization` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// Checkout wizard position. The flow is strictly forward-advancing:
/// `Details`, then `Complete`. The cart page itself leaves no marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Filling in shipping and contact details.
    Details,
    /// Order placed; holds the confirmation the customer may view.
    Complete { order_id: OrderId },
}

/// Session keys for per-customer state.
pub mod keys {
    /// Key for storing the current logged-in customer.
    pub const CURRENT_CUSTOMER: &str = "current_customer";

    /// Key for the Platform API bearer token.
    pub const AUTH_TOKEN: &str = "auth_token";

    /// Key for storing the Platform API cart ID.
    pub const CART_ID: &str = "cart_id";

    /// Key for the checkout wizard marker.
    pub const CHECKOUT_STEP: &str = "checkout_step";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_token_debug_is_redacted() {
        let token = AuthToken::new("tok_live_abc123".to_string());
        let debug = format!("{token:?}");
        assert!(!debug.contains("abc123"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_checkout_step_roundtrip() {
        for step in [
            CheckoutStep::Details,
            CheckoutStep::Complete {
                order_id: OrderId::new(42),
            },
        ] {
            let json = serde_json::to_string(&step).unwrap();
            let parsed: CheckoutStep = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, step);
        }
    }
}
