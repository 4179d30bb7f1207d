//! Orders list screen.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use tracing::instrument;

use crate::components::data_table::{DataTableConfig, orders_table_config};
use crate::error::Result;
use crate::middleware::{CspNonce, RequireStaffAuth};
use crate::platform::types::OrderQuery;
use crate::state::AppState;
use crate::views::{OrderRow, Paging, filter_suffix};

use super::super::dashboard::StaffView;

/// Orders table template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub table: DataTableConfig,
    pub rows: Vec<OrderRow>,
    pub query: OrderQuery,
    pub paging: Paging,
    pub filter_suffix: String,
    pub nonce: String,
}

/// Orders list. Search, status, and date filters are forwarded to the
/// Platform API; a page past the end renders as an empty table.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Query(query): Query<OrderQuery>,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let page = state.api().list_orders(auth.token.as_str(), &query).await?;

    let template = OrdersTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/orders".to_string(),
        table: orders_table_config(),
        rows: page.items.iter().map(OrderRow::from).collect(),
        paging: Paging::from_page(&page),
        filter_suffix: filter_suffix(&query.to_query()),
        query,
        nonce,
    };
    Ok(Html(template.render()?))
}
