//! Order detail and status transitions.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use bristle_core::{OrderId, OrderStatus};

use crate::error::Result;
use crate::middleware::{CspNonce, RequireStaffAuth, StaffContext};
use crate::platform::ApiError;
use crate::state::AppState;
use crate::views::OrderDetailView;

use super::super::dashboard::StaffView;

/// Order detail template.
#[derive(Template)]
#[template(path = "orders/detail.html")]
pub struct OrderDetailTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub order: OrderDetailView,
    pub statuses: Vec<(String, String)>,
    pub banner: Option<String>,
    pub updated: bool,
    pub nonce: String,
}

fn status_options() -> Vec<(String, String)> {
    OrderStatus::ALL
        .iter()
        .map(|status| (status.to_string(), status.label().to_string()))
        .collect()
}

fn render(
    auth: &StaffContext,
    order: OrderDetailView,
    banner: Option<String>,
    updated: bool,
    nonce: String,
) -> Result<Html<String>> {
    let template = OrderDetailTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/orders".to_string(),
        order,
        statuses: status_options(),
        banner,
        updated,
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Order detail, rendering the server-computed summary verbatim.
#[instrument(skip_all, fields(order_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let order = state
        .api()
        .get_order(auth.token.as_str(), OrderId::new(id))
        .await?;
    render(&auth, OrderDetailView::from(&order), None, false, nonce)
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Request a status transition. The Platform API owns the transition rules;
/// whatever state it returns (or refuses with) is what gets rendered.
#[instrument(skip_all, fields(order_id = %id))]
pub async fn status(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
    CspNonce(nonce): CspNonce,
    Form(form): Form<StatusForm>,
) -> Result<Html<String>> {
    let token = auth.token.as_str();
    let order_id = OrderId::new(id);

    let Ok(requested) = form.status.parse::<OrderStatus>() else {
        let order = state.api().get_order(token, order_id).await?;
        return render(
            &auth,
            OrderDetailView::from(&order),
            Some(format!("Unknown status: {}", form.status)),
            false,
            nonce,
        );
    };

    match state.api().request_order_status(token, order_id, requested).await {
        Ok(order) => render(&auth, OrderDetailView::from(&order), None, true, nonce),
        Err(ApiError::Validation(errors)) => {
            let banner = errors
                .first()
                .map_or_else(|| "Transition rejected".to_string(), |e| e.message.clone());
            let order = state.api().get_order(token, order_id).await?;
            render(&auth, OrderDetailView::from(&order), Some(banner), false, nonce)
        }
        Err(e) => Err(e.into()),
    }
}
