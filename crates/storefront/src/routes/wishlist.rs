//! Wishlist routes.
//!
//! The toggle posts the desired membership and renders whatever the server
//! confirms: adding an already-present product and removing an absent one
//! both land on the requested final state. The listing endpoint returns
//! the full set, so pagination is applied here.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use bristle_core::{Page, ProductId};

use crate::error::Result;
use crate::middleware::{CspNonce, RequireAuth};
use crate::state::AppState;
use crate::views::{Paging, ProductCard};

/// Wishlist rows shown per page.
const PER_PAGE: u32 = 12;

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/index.html")]
pub struct WishlistTemplate {
    pub entries: Vec<WishlistRow>,
    pub paging: Paging,
    pub nonce: String,
}

/// One wishlist row.
#[derive(Debug, Clone)]
pub struct WishlistRow {
    pub product_id: i64,
    pub card: ProductCard,
    pub added_at: String,
}

/// Listing query parameters.
#[derive(Debug, Deserialize)]
pub struct WishlistQuery {
    pub page: Option<u32>,
}

/// Toggle form data.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub product_id: i64,
    /// "add" or "remove".
    pub action: String,
    /// Path to return to; defaults to the wishlist page.
    pub next: Option<String>,
}

/// Display one page of the wishlist. A page past the end renders the
/// empty state with the totals intact.
#[instrument(skip(state, auth, nonce))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<WishlistQuery>,
    RequireAuth(auth): RequireAuth,
    CspNonce(nonce): CspNonce,
) -> Result<WishlistTemplate> {
    let entries = state.api().list_wishlist(auth.token.as_str()).await?;

    let rows: Vec<WishlistRow> = entries
        .iter()
        .map(|entry| WishlistRow {
            product_id: entry.product.id.as_i64(),
            card: ProductCard::from(&entry.product),
            added_at: entry.added_at.format("%B %e, %Y").to_string(),
        })
        .collect();
    let (entries, paging) = paginate(rows, query.page.unwrap_or(1));

    Ok(WishlistTemplate {
        entries,
        paging,
        nonce,
    })
}

/// Slice the full wishlist into the requested page.
fn paginate(rows: Vec<WishlistRow>, page: u32) -> (Vec<WishlistRow>, Paging) {
    let page = Page::slice(rows, page, PER_PAGE);
    let paging = Paging::from_page(&page);
    (page.items, paging)
}

/// Add or remove a product. Both directions are idempotent.
#[instrument(skip(state, auth), fields(product_id = %form.product_id, action = %form.action))]
pub async fn toggle(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    Form(form): Form<ToggleForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id);

    match form.action.as_str() {
        "add" => {
            state
                .api()
                .add_to_wishlist(auth.token.as_str(), product_id)
                .await?;
        }
        "remove" => {
            state
                .api()
                .remove_from_wishlist(auth.token.as_str(), product_id)
                .await?;
        }
        other => {
            return Err(crate::error::AppError::BadRequest(format!(
                "Unknown wishlist action: {other}"
            )));
        }
    }

    // Only same-site paths; anything else falls back to the wishlist page
    let next = form
        .next
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or_else(|| "/wishlist".to_string());

    Ok(Redirect::to(&next).into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(id: i64) -> WishlistRow {
        WishlistRow {
            product_id: id,
            card: ProductCard {
                handle: format!("product-{id}"),
                name: format!("Product {id}"),
                image_url: None,
                price: "$10.00".to_string(),
                original_price: None,
                discount_label: None,
                rating: None,
                review_count: 0,
                in_stock: true,
            },
            added_at: "August 24, 2026".to_string(),
        }
    }

    #[test]
    fn test_paginate_slices_the_full_set() {
        let rows: Vec<WishlistRow> = (1..=25).map(row).collect();

        let (entries, paging) = paginate(rows, 2);
        assert_eq!(entries.len(), PER_PAGE as usize);
        assert_eq!(entries.first().unwrap().product_id, 13);
        assert_eq!(entries.last().unwrap().product_id, 24);
        assert_eq!(paging.page, 2);
        assert_eq!(paging.total_pages, 3);
        assert_eq!(paging.total_items, 25);
        assert!(paging.has_prev);
        assert!(paging.has_next);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty_with_totals() {
        let rows: Vec<WishlistRow> = (1..=5).map(row).collect();

        let (entries, paging) = paginate(rows, 9999);
        assert!(entries.is_empty());
        assert_eq!(paging.total_items, 5);
        assert_eq!(paging.total_pages, 1);
        assert!(paging.has_prev);
        assert!(!paging.has_next);
    }

    #[test]
    fn test_paginate_clamps_page_zero_to_first() {
        let rows: Vec<WishlistRow> = (1..=3).map(row).collect();

        let (entries, paging) = paginate(rows, 0);
        assert_eq!(entries.len(), 3);
        assert_eq!(paging.page, 1);
    }
}
