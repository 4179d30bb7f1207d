//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::{CspNonce, RequireStaffAuth};
use crate::models::CurrentStaff;
use crate::state::AppState;
use crate::views::format_price;

/// Staff view for the page chrome.
#[derive(Debug, Clone)]
pub struct StaffView {
    pub name: String,
    pub role: String,
    pub is_manager: bool,
}

impl From<&CurrentStaff> for StaffView {
    fn from(staff: &CurrentStaff) -> Self {
        Self {
            name: staff.name.clone(),
            role: staff.role.label().to_string(),
            is_manager: staff.is_manager(),
        }
    }
}

/// One summary card.
#[derive(Debug, Clone)]
pub struct SummaryCard {
    pub label: String,
    pub value: String,
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub cards: Vec<SummaryCard>,
    pub status_counts: Vec<(String, u64)>,
    pub nonce: String,
}

/// Dashboard: summary cards from the reports service, displayed verbatim.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let summary = state.api().report_summary(auth.token.as_str()).await?;

    let total_orders: u64 = summary.orders_by_status.iter().map(|s| s.count).sum();
    let cards = vec![
        SummaryCard {
            label: "Orders".to_string(),
            value: total_orders.to_string(),
        },
        SummaryCard {
            label: "Revenue".to_string(),
            value: format_price(summary.revenue, summary.currency),
        },
        SummaryCard {
            label: "Customers".to_string(),
            value: summary.user_count.to_string(),
        },
        SummaryCard {
            label: "Products".to_string(),
            value: summary.product_count.to_string(),
        },
    ];

    let status_counts = summary
        .orders_by_status
        .iter()
        .map(|bucket| (bucket.status.label().to_string(), bucket.count))
        .collect();

    let template = DashboardTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/".to_string(),
        cards,
        status_counts,
        nonce,
    };
    Ok(Html(template.render()?))
}
