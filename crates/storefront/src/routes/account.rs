//! Customer account routes: overview, profile, order history.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use bristle_core::OrderId;

use crate::api::{ApiError, FieldError};
use crate::error::{AppError, Result};
use crate::forms::ProfileForm;
use crate::middleware::{CspNonce, RequireAuth};
use crate::state::AppState;
use crate::views::{OrderView, Paging};

/// Account overview template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub picture_url: Option<String>,
    pub member_since: String,
    pub nonce: String,
}

/// Profile edit template.
#[derive(Template, WebTemplate)]
#[template(path = "account/profile.html")]
pub struct ProfileTemplate {
    pub name: String,
    pub phone: String,
    pub picture_url: Option<String>,
    pub errors: Vec<FieldError>,
    pub saved: bool,
    pub nonce: String,
}

impl ProfileTemplate {
    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Order history row.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: i64,
    pub placed_at: String,
    pub status: String,
    pub total: String,
    pub item_count: u32,
}

/// Order history template.
#[derive(Template, WebTemplate)]
#[template(path = "account/orders.html")]
pub struct OrdersTemplate {
    pub orders: Vec<OrderRow>,
    pub paging: Paging,
    pub nonce: String,
}

/// Order detail template.
#[derive(Template, WebTemplate)]
#[template(path = "account/order_detail.html")]
pub struct OrderDetailTemplate {
    pub order: OrderView,
    pub nonce: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// Account overview.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    CspNonce(nonce): CspNonce,
) -> Result<AccountTemplate> {
    let profile = state.api().get_profile(auth.token.as_str()).await?;

    Ok(AccountTemplate {
        name: profile.name,
        email: profile.email.to_string(),
        phone: profile.phone,
        picture_url: profile.profile_picture_url,
        member_since: profile.created_at.format("%B %Y").to_string(),
        nonce,
    })
}

/// Profile edit form.
#[instrument(skip_all)]
pub async fn profile_page(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    CspNonce(nonce): CspNonce,
) -> Result<ProfileTemplate> {
    let profile = state.api().get_profile(auth.token.as_str()).await?;

    Ok(ProfileTemplate {
        name: profile.name,
        phone: profile.phone.unwrap_or_default(),
        picture_url: profile.profile_picture_url,
        errors: Vec::new(),
        saved: false,
        nonce,
    })
}

/// Profile update action.
#[instrument(skip_all)]
pub async fn update_profile(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    CspNonce(nonce): CspNonce,
    Form(form): Form<ProfileForm>,
) -> Result<Response> {
    // Validate before any network call
    if let Err(errors) = form.validate() {
        return Ok(ProfileTemplate {
            name: form.name,
            phone: form.phone,
            picture_url: None,
            errors,
            saved: false,
            nonce,
        }
        .into_response());
    }

    match state
        .api()
        .update_profile(auth.token.as_str(), &form.into_update())
        .await
    {
        Ok(profile) => Ok(ProfileTemplate {
            name: profile.name,
            phone: profile.phone.unwrap_or_default(),
            picture_url: profile.profile_picture_url,
            errors: Vec::new(),
            saved: true,
            nonce,
        }
        .into_response()),
        Err(ApiError::Validation(errors)) => {
            let profile = state.api().get_profile(auth.token.as_str()).await?;
            Ok(ProfileTemplate {
                name: profile.name,
                phone: profile.phone.unwrap_or_default(),
                picture_url: profile.profile_picture_url,
                errors,
                saved: false,
                nonce,
            }
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Profile picture upload (multipart passthrough to the Platform API).
#[instrument(skip_all)]
pub async fn upload_picture(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    mut multipart: Multipart,
) -> Result<Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("picture") {
            let filename = field
                .file_name()
                .unwrap_or("profile-picture")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            state
                .api()
                .upload_profile_picture(auth.token.as_str(), filename, bytes.to_vec())
                .await?;

            return Ok(axum::response::Redirect::to("/account/profile").into_response());
        }
    }

    Err(AppError::BadRequest("Missing picture field".to_string()))
}

/// Order history, server-paginated.
#[instrument(skip_all)]
pub async fn orders(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    Query(query): Query<PageQuery>,
    CspNonce(nonce): CspNonce,
) -> Result<OrdersTemplate> {
    let page = state
        .api()
        .list_orders(auth.token.as_str(), query.page.unwrap_or(1))
        .await?;

    let orders = page
        .items
        .iter()
        .map(|order| OrderRow {
            id: order.id.as_i64(),
            placed_at: order.placed_at.format("%B %e, %Y").to_string(),
            status: order.status.label().to_string(),
            total: crate::views::format_price(order.summary.total, order.summary.currency),
            item_count: order.items.iter().map(|item| item.quantity).sum(),
        })
        .collect();

    Ok(OrdersTemplate {
        orders,
        paging: Paging::from_page(&page),
        nonce,
    })
}

/// Order detail, rendering the server-computed summary verbatim.
#[instrument(skip_all, fields(order_id = %order_id))]
pub async fn order_detail(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    Path(order_id): Path<i64>,
    CspNonce(nonce): CspNonce,
) -> Result<OrderDetailTemplate> {
    let order = state
        .api()
        .get_order(auth.token.as_str(), OrderId::new(order_id))
        .await?;

    Ok(OrderDetailTemplate {
        order: OrderView::from(&order),
        nonce,
    })
}
