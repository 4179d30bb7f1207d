//! Customer account management routes.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use bristle_core::UserId;

use crate::components::data_table::{DataTableConfig, users_table_config};
use crate::error::Result;
use crate::middleware::{CspNonce, RequireManager, RequireStaffAuth};
use crate::platform::types::CustomerAccount;
use crate::state::AppState;
use crate::views::{Paging, format_date, format_price};

fn search_suffix(q: &str) -> String {
    if q.trim().is_empty() {
        String::new()
    } else {
        format!("&q={}", urlencoding::encode(q.trim()))
    }
}

use super::dashboard::StaffView;

/// Customer row for the users table.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub orders: u32,
    pub spent: String,
    pub joined: String,
}

impl From<&CustomerAccount> for UserRow {
    fn from(account: &CustomerAccount) -> Self {
        Self {
            id: account.id.as_i64(),
            name: account.name.clone(),
            email: account.email.to_string(),
            orders: account.order_count,
            spent: format_price(account.lifetime_spend, account.currency),
            joined: format_date(account.created_at),
        }
    }
}

/// Users table template.
#[derive(Template)]
#[template(path = "users/index.html")]
pub struct UsersTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub table: DataTableConfig,
    pub rows: Vec<UserRow>,
    pub q: String,
    pub paging: Paging,
    pub filter_suffix: String,
    pub nonce: String,
}

/// Customer detail template.
#[derive(Template)]
#[template(path = "users/detail.html")]
pub struct UserDetailTemplate {
    pub staff: StaffView,
    pub current_path: String,
    pub user: UserRow,
    pub phone: Option<String>,
    pub nonce: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub page: Option<u32>,
    pub q: Option<String>,
}

/// Customer list with server-driven search and pagination.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Query(query): Query<UsersQuery>,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let page = state
        .api()
        .list_users(
            auth.token.as_str(),
            query.page.unwrap_or(1),
            query.q.as_deref(),
        )
        .await?;

    let template = UsersTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/users".to_string(),
        table: users_table_config(),
        rows: page.items.iter().map(UserRow::from).collect(),
        paging: Paging::from_page(&page),
        filter_suffix: search_suffix(query.q.as_deref().unwrap_or_default()),
        q: query.q.unwrap_or_default(),
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Customer detail.
#[instrument(skip_all, fields(user_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    RequireStaffAuth(auth): RequireStaffAuth,
    Path(id): Path<i64>,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let account = state
        .api()
        .get_user(auth.token.as_str(), UserId::new(id))
        .await?;

    let template = UserDetailTemplate {
        staff: StaffView::from(&auth.staff),
        current_path: "/users".to_string(),
        user: UserRow::from(&account),
        phone: account.phone.clone(),
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Delete a customer account. Manager-only.
#[instrument(skip_all, fields(user_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(auth): RequireManager,
    Path(id): Path<i64>,
) -> Result<Response> {
    state
        .api()
        .delete_user(auth.token.as_str(), UserId::new(id))
        .await?;
    Ok(Redirect::to("/users").into_response())
}
