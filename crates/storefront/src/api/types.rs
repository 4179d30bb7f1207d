//! Platform API data model.
//!
//! These types mirror the JSON shapes the Platform API returns. Amounts are
//! `rust_decimal` values serialized as strings; the client never computes
//! totals, it only carries the server's figures to the templates.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bristle_core::{
    CartItemId, CategoryId, CurrencyCode, Discount, Email, OrderId, OrderStatus, ProductId, UserId,
    WishlistEntryId,
};

// =============================================================================
// Catalog
// =============================================================================

/// A product as returned by the Platform API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// URL-safe handle, unique per product.
    pub handle: String,
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    /// List price before any discount.
    pub price: Decimal,
    pub currency: CurrencyCode,
    pub discount: Option<Discount>,
    /// Average rating (0-5), absent until the first review.
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub review_count: u32,
    /// Units in stock, server-authoritative.
    pub stock: i64,
    pub image_url: Option<String>,
    /// User-guide PDF, when one has been uploaded.
    pub guide_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The price to display after applying any discount.
    #[must_use]
    pub fn display_price(&self) -> Decimal {
        self.discount
            .map_or(self.price, |discount| discount.apply(self.price))
    }

    /// Whether a struck-through list price should be shown.
    #[must_use]
    pub const fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }

    /// Whether the product can be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-safe slug used in filter query params.
    pub slug: String,
}

/// Query parameters for product listings.
///
/// Filtering and pagination are server-driven: every field is forwarded to
/// the Platform API as a query parameter and applies to the full dataset
/// there, never to an already-fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Category slug.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    /// Free-text search term.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<Decimal>,
    pub featured: Option<bool>,
}

/// Treat empty form inputs (`min_price=`) as absent filters.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

impl ProductQuery {
    /// Default page size for storefront listings.
    pub const DEFAULT_PER_PAGE: u32 = 12;

    /// Serialize to query pairs for the Platform API.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.unwrap_or(1).to_string()),
            (
                "per_page",
                self.per_page.unwrap_or(Self::DEFAULT_PER_PAGE).to_string(),
            ),
        ];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.to_string()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        pairs
    }

    /// Stable cache key for this query.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let pairs = self.to_query();
        let mut key = String::from("products");
        for (name, value) in pairs {
            key.push(':');
            key.push_str(name);
            key.push('=');
            key.push_str(&value);
        }
        key
    }

    /// Search results are not cached.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        self.q.is_some()
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A server-held cart with server-computed totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Opaque cart identifier held in the session.
    pub id: String,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    /// Total discount applied across all lines.
    #[serde(default)]
    pub discount_total: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub currency: CurrencyCode,
}

impl Cart {
    /// Total unit count across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub handle: String,
    pub name: String,
    pub image_url: Option<String>,
    /// Per-unit price after discount, server-computed.
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

// =============================================================================
// Customer & auth
// =============================================================================

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub phone: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Successful login/register response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub token: String,
    pub user: Customer,
}

/// Profile update payload.
#[derive(Debug, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: Option<String>,
}

// =============================================================================
// Orders & checkout
// =============================================================================

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

/// Server-computed order money summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub currency: CurrencyCode,
}

/// One order line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub summary: OrderSummary,
    pub shipping_address: Address,
}

/// Complete order payload posted once per successful checkout submission.
#[derive(Debug, Serialize)]
pub struct CheckoutPayload {
    pub cart_id: String,
    pub email: String,
    pub shipping_address: Address,
}

// =============================================================================
// Wishlist
// =============================================================================

/// One wishlist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub product: Product,
    pub added_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn product(price: &str, discount: Option<Discount>) -> Product {
        Product {
            id: ProductId::new(1),
            handle: "beard-oil".to_string(),
            name: "Beard Oil".to_string(),
            description: String::new(),
            category: None,
            price: d(price),
            currency: CurrencyCode::USD,
            discount,
            rating: None,
            review_count: 0,
            stock: 10,
            image_url: None,
            guide_url: None,
            featured: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_price_without_discount() {
        assert_eq!(product("24.99", None).display_price(), d("24.99"));
    }

    #[test]
    fn test_display_price_with_percentage_discount() {
        let p = product("24.99", Some(Discount::Percentage(d("20"))));
        // 24.99 - 4.998 = 19.992 -> 19.99
        assert_eq!(p.display_price(), d("19.99"));
    }

    #[test]
    fn test_display_price_with_fixed_discount_floors_at_zero() {
        let p = product("4.99", Some(Discount::Fixed(d("10"))));
        assert_eq!(p.display_price(), Decimal::ZERO);
    }

    #[test]
    fn test_product_query_defaults() {
        let query = ProductQuery::default();
        let pairs = query.to_query();
        assert!(pairs.contains(&("page", "1".to_string())));
        assert!(pairs.contains(&("per_page", "12".to_string())));
        assert!(!query.is_search());
    }

    #[test]
    fn test_product_query_cache_key_distinguishes_filters() {
        let base = ProductQuery::default();
        let filtered = ProductQuery {
            category: Some("beard-care".to_string()),
            ..Default::default()
        };
        assert_ne!(base.cache_key(), filtered.cache_key());
    }

    #[test]
    fn test_cart_item_count_sums_quantities() {
        let cart = Cart {
            id: "cart-1".to_string(),
            items: vec![
                CartItem {
                    id: CartItemId::new(1),
                    product_id: ProductId::new(1),
                    handle: "beard-oil".to_string(),
                    name: "Beard Oil".to_string(),
                    image_url: None,
                    unit_price: d("19.99"),
                    quantity: 2,
                    line_total: d("39.98"),
                },
                CartItem {
                    id: CartItemId::new(2),
                    product_id: ProductId::new(2),
                    handle: "comb".to_string(),
                    name: "Comb".to_string(),
                    image_url: None,
                    unit_price: d("9.99"),
                    quantity: 1,
                    line_total: d("9.99"),
                },
            ],
            subtotal: d("49.97"),
            discount_total: Decimal::ZERO,
            tax: d("4.00"),
            shipping: d("5.00"),
            total: d("58.97"),
            currency: CurrencyCode::USD,
        };
        assert_eq!(cart.item_count(), 3);
        assert!(!cart.is_empty());
    }
}
