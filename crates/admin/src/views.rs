//! Display-model types shared across admin templates.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use bristle_core::{CurrencyCode, Page};

use crate::platform::types::{Order, Product};

/// Format a server-provided amount for display, e.g. `$19.99`.
#[must_use]
pub fn format_price(amount: Decimal, currency: CurrencyCode) -> String {
    format!("{}{:.2}", currency.symbol(), amount)
}

/// Short date for table cells, e.g. `Aug 24, 2026`.
#[must_use]
pub fn format_date(when: DateTime<Utc>) -> String {
    when.format("%b %e, %Y").to_string()
}

/// Query-string tail appended to pagination links so filters survive a
/// page change. The `page` parameter itself is excluded.
#[must_use]
pub fn filter_suffix(params: &[(&str, String)]) -> String {
    params
        .iter()
        .filter(|(key, _)| *key != "page")
        .map(|(key, value)| format!("&{key}={}", urlencoding::encode(value)))
        .collect()
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

/// Product row for the products table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub handle: String,
    pub category: String,
    pub price: String,
    pub discount_label: Option<String>,
    pub stock: u32,
    pub status: String,
    pub featured: bool,
    pub created: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            handle: product.handle.clone(),
            category: product
                .category
                .as_ref()
                .map_or_else(|| "—".to_string(), |c| c.name.clone()),
            price: format_price(product.price, product.currency),
            discount_label: product
                .discount
                .map(|discount| discount.label(product.currency)),
            stock: product.stock,
            status: product.status.label().to_string(),
            featured: product.featured,
            created: format_date(product.created_at),
        }
    }
}

/// Order row for the orders table.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: i64,
    pub placed: String,
    pub customer: String,
    pub email: String,
    pub status: String,
    pub status_value: String,
    pub total: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i64(),
            placed: format_date(order.placed_at),
            customer: order.customer_name.clone(),
            email: order.customer_email.to_string(),
            status: order.status.label().to_string(),
            status_value: order.status.to_string(),
            total: format_price(order.summary.total, order.summary.currency),
        }
    }
}

/// Order line for the detail screen.
#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Full order detail with the server-computed summary rendered verbatim.
#[derive(Debug, Clone)]
pub struct OrderDetailView {
    pub id: i64,
    pub placed: String,
    pub customer: String,
    pub email: String,
    pub status: String,
    pub status_value: String,
    pub items: Vec<OrderItemView>,
    pub subtotal: String,
    pub discount: Option<String>,
    pub tax: String,
    pub shipping: String,
    pub total: String,
    pub ship_to: String,
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        let currency = order.summary.currency;
        let address = &order.shipping_address;
        Self {
            id: order.id.as_i64(),
            placed: format_date(order.placed_at),
            customer: order.customer_name.clone(),
            email: order.customer_email.to_string(),
            status: order.status.label().to_string(),
            status_value: order.status.to_string(),
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

    #[test]
    fn test_format_price_pads_cents() {
        let amount = Decimal::from_str("8.5").unwrap();
        assert_eq!(format_price(amount, CurrencyCode::USD), "$8.50");
    }

    #[test]
    fn test_filter_suffix_skips_page_and_encodes() {
        let params = vec![
            ("page", "3".to_string()),
            ("q", "beard oil".to_string()),
            ("status", "active".to_string()),
        ];
        assert_eq!(filter_suffix(&params), "&q=beard%20oil&status=active");
    }

    #[test]
    fn test_paging_clamps_prev_on_first_page() {
        let page = Page::slice(vec![1, 2, 3], 1, 2);
        let paging = Paging::from_page(&page);
        assert_eq!(paging.prev_page, 1);
        assert!(!paging.has_prev);
        assert!(paging.has_next);
    }
}
