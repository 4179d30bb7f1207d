//! Display-model types shared across templates.
//!
//! Templates render preformatted strings; all money figures are formatted
//! here from the server's decimal values, never recomputed.

use rust_decimal::Decimal;

use bristle_core::{CurrencyCode, Page};

use crate::api::types::{Cart, CartItem, Order, Product};

/// Format a server-provided amount for display, e.g. `$19.99`.
#[must_use]
pub fn format_price(amount: Decimal, currency: CurrencyCode) -> String {
    format!("{}{:.2}", currency.symbol(), amount)
}

/// Product display data for cards and detail pages.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub handle: String,
    pub name: String,
    pub image_url: Option<String>,
    /// Final display price (after discount).
    pub price: String,
    /// Struck-through list price, present only when discounted.
    pub original_price: Option<String>,
    /// e.g. "15% off".
    pub discount_label: Option<String>,
    /// e.g. "4.5" with the review count alongside.
    pub rating: Option<String>,
    pub review_count: u32,
    pub in_stock: bool,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            handle: product.handle.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            price: format_price(product.display_price(), product.currency),
            original_price: product
                .is_discounted()
                .then(|| format_price(product.price, product.currency)),
            discount_label: product
                .discount
                .map(|discount| discount.label(product.currency)),
            rating: product.rating.map(|r| format!("{r:.1}")),
            review_count: product.review_count,
            in_stock: product.in_stock(),
        }
    }
}

/// Pagination display data.
#[derive(Debug, Clone)]
pub struct Paging {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: u32,
    pub next_page: u32,
}

impl Paging {
    #[must_use]
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            prev_page: page.page.saturating_sub(1).max(1),
            next_page: page.page.saturating_add(1),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: i64,
    pub handle: String,
    pub name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data. All totals come from the server response.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub discount_total: Option<String>,
    pub tax: String,
    pub shipping: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            discount_total: None,
            tax: "$0.00".to_string(),
            shipping: "$0.00".to_string(),
            total: "$0.00".to_string(),
            item_count: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let currency = cart.currency;
        Self {
            items: cart
                .items
                .iter()
                .map(|item| CartItemView::from_item(item, currency))
                .collect(),
            subtotal: format_price(cart.subtotal, currency),
            discount_total: (!cart.discount_total.is_zero())
                .then(|| format_price(cart.discount_total, currency)),
            tax: format_price(cart.tax, currency),
            shipping: format_price(cart.shipping, currency),
            total: format_price(cart.total, currency),
            item_count: cart.item_count(),
        }
    }
}

impl CartItemView {
    fn from_item(item: &CartItem, currency: CurrencyCode) -> Self {
        Self {
            id: item.id.as_i64(),
            handle: item.handle.clone(),
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            quantity: item.quantity,
            unit_price: format_price(item.unit_price, currency),
            line_total: format_price(item.line_total, currency),
        }
    }
}

/// Order line display data.
#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Order display data with the server-computed summary.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: i64,
    pub status: String,
    pub placed_at: String,
    pub items: Vec<OrderItemView>,
    pub subtotal: String,
    pub discount: Option<String>,
    pub tax: String,
    pub shipping: String,
    pub total: String,
    pub ship_to: String,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let currency = order.summary.currency;
        let address = &order.shipping_address;
        Self {
            id: order.id.as_i64(),
            status: order.status.label().to_string(),
            placed_at: order.placed_at.format("%B %e, %Y").to_string(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price: format_price(item.unit_price, currency),
                    line_total: format_price(item.line_total, currency),
                })
                .collect(),
            subtotal: format_price(order.summary.subtotal, currency),
            discount: (!order.summary.discount.is_zero())
                .then(|| format_price(order.summary.discount, currency)),
            tax: format_price(order.summary.tax, currency),
            shipping: format_price(order.summary.shipping, currency),
            total: format_price(order.summary.total, currency),
            ship_to: format!(
                "{}, {}, {} {}, {}",
                address.line1, address.city, address.postal_code, address.country, address.name
            ),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use bristle_core::Discount;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(d("19.9"), CurrencyCode::USD), "$19.90");
        assert_eq!(format_price(d("5"), CurrencyCode::EUR), "\u{20ac}5.00");
    }

    #[test]
    fn test_product_card_discount_pricing() {
        let product = crate::api::types::Product {
            id: bristle_core::ProductId::new(1),
            handle: "beard-balm".to_string(),
            name: "Beard Balm".to_string(),
            description: String::new(),
            category: None,
            price: d("20.00"),
            currency: CurrencyCode::USD,
            discount: Some(Discount::Percentage(d("15"))),
            rating: Some(d("4.5")),
            review_count: 12,
            stock: 3,
            image_url: None,
            guide_url: None,
            featured: false,
            created_at: chrono::Utc::now(),
        };

        let card = ProductCard::from(&product);
        assert_eq!(card.price, "$17.00");
        assert_eq!(card.original_price.as_deref(), Some("$20.00"));
        assert_eq!(card.discount_label.as_deref(), Some("15% off"));
        assert_eq!(card.rating.as_deref(), Some("4.5"));
        assert!(card.in_stock);
    }

    #[test]
    fn test_paging_from_page() {
        let page = Page::slice((1..=25).collect::<Vec<i32>>(), 2, 10);
        let paging = Paging::from_page(&page);
        assert_eq!(paging.page, 2);
        assert_eq!(paging.total_pages, 3);
        assert!(paging.has_prev);
        assert!(paging.has_next);
        assert_eq!(paging.prev_page, 1);
        assert_eq!(paging.next_page, 3);
    }
}
