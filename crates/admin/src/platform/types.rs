//! Wire types for the admin side of the Platform API.
//!
//! These mirror the Platform API's JSON bodies. All money figures arrive
//! computed; the admin renders them verbatim.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bristle_core::{
    CategoryId, CurrencyCode, Discount, Email, OrderId, OrderStatus, ProductId, StaffId,
    StaffRole, UserId,
};

/// Catalog lifecycle state of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

impl ProductStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Draft, Self::Archived];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
        }
    }
}

/// A product as the back office sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub handle: String,
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    pub price: Decimal,
    pub currency: CurrencyCode,
    pub discount: Option<Discount>,
    pub stock: u32,
    pub status: ProductStatus,
    pub featured: bool,
    pub image_url: Option<String>,
    pub guide_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// Create/update payload for a product. The Platform API computes nothing
/// from this except persistence; display prices still come back computed.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub handle: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub price: Decimal,
    pub discount: Option<Discount>,
    pub stock: u32,
    pub status: ProductStatus,
    pub featured: bool,
}

/// Server-driven product list query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ProductQuery {
    /// Express the query as Platform API query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.unwrap_or(1).to_string())];
        if let Some(q) = self.q.as_deref().filter(|s| !s.trim().is_empty()) {
            params.push(("q", q.trim().to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            params.push(("category", category.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_string()));
        }
        params
    }
}

/// An order as the back office sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub customer_email: Email,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub summary: OrderTotals,
    pub shipping_address: Address,
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

/// Server-computed order totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub currency: CurrencyCode,
}

/// Shipping address on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Server-driven order list query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    pub page: Option<u32>,
    pub q: Option<String>,
    pub status: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
}

impl OrderQuery {
    /// Express the query as Platform API query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.unwrap_or(1).to_string())];
        if let Some(q) = self.q.as_deref().filter(|s| !s.trim().is_empty()) {
            params.push(("q", q.trim().to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            params.push(("status", status.to_string()));
        }
        if let Some(from) = self.from.as_deref().filter(|s| !s.is_empty()) {
            params.push(("from", from.to_string()));
        }
        if let Some(to) = self.to.as_deref().filter(|s| !s.is_empty()) {
            params.push(("to", to.to_string()));
        }
        params
    }
}

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAccount {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub order_count: u32,
    pub lifetime_spend: Decimal,
    pub currency: CurrencyCode,
}

/// A staff account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub email: Email,
    pub name: String,
    pub role: StaffRole,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload for a staff account. The Platform API sends the
/// invitation email; no password crosses this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct StaffPayload {
    pub email: String,
    pub name: String,
    pub role: StaffRole,
}

/// Staff login response.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffAuthSession {
    pub token: String,
    pub staff: StaffMember,
}

/// One order-status bucket on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u64,
}

/// Dashboard summary from the reports service. Displayed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub orders_by_status: Vec<StatusCount>,
    pub revenue: Decimal,
    pub currency: CurrencyCode,
    pub user_count: u64,
    pub product_count: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_query_skips_blank_filters() {
        let query = ProductQuery {
            page: Some(2),
            q: Some("  ".to_string()),
            category: Some(String::new()),
            status: Some("draft".to_string()),
        };
        let params = query.to_query();
        assert_eq!(
            params,
            vec![("page", "2".to_string()), ("status", "draft".to_string())]
        );
    }

    #[test]
    fn test_order_query_defaults_to_first_page() {
        let params = OrderQuery::default().to_query();
        assert_eq!(params, vec![("page", "1".to_string())]);
    }

    #[test]
    fn test_product_status_serde() {
        let json = serde_json::to_string(&ProductStatus::Archived).unwrap();
        assert_eq!(json, "\"archived\"");
        let back: ProductStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(back, ProductStatus::Active);
    }

    #[test]
    fn test_report_summary_roundtrip() {
        let json = r#"{
            "orders_by_status": [
                {"status": "processing", "count": 4},
                {"status": "shipped", "count": 9}
            ],
            "revenue": "1240.50",
            "currency": "USD",
            "user_count": 310,
            "product_count": 28
        }"#;
        let summary: ReportSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.orders_by_status.len(), 2);
        assert_eq!(summary.orders_by_status[0].status, OrderStatus::Processing);
        assert_eq!(summary.user_count, 310);
    }
}
