//! Product listing and detail pages.
//!
//! Filtering and pagination are server-driven: the raw query parameters are
//! forwarded to the Platform API, which applies them to the full catalog. A
//! page number past the end renders the empty state, not an error.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use crate::api::types::{Category, Product, ProductQuery};
use crate::error::Result;
use crate::middleware::{CspNonce, OptionalAuth};
use crate::state::AppState;
use crate::views::{Paging, ProductCard};

/// Currently applied filters, echoed back into the filter form.
#[derive(Debug, Clone, Default)]
pub struct ActiveFilters {
    pub category: Option<String>,
    pub q: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl ActiveFilters {
    fn from_query(query: &ProductQuery) -> Self {
        Self {
            category: query.category.clone(),
            q: query.q.clone(),
            min_price: query.min_price.map(|d| d.to_string()),
            max_price: query.max_price.map(|d| d.to_string()),
        }
    }

    /// Query-string suffix to keep filters across pagination links.
    #[must_use]
    pub fn query_suffix(&self) -> String {
        let mut suffix = String::new();
        for (name, value) in [
            ("category", &self.category),
            ("q", &self.q),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
        ] {
            if let Some(value) = value {
                suffix.push('&');
                suffix.push_str(name);
                suffix.push('=');
                suffix.push_str(&urlencoding::encode(value));
            }
        }
        suffix
    }
}

/// Product listing template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductIndexTemplate {
    pub products: Vec<ProductCard>,
    pub categories: Vec<Category>,
    pub filters: ActiveFilters,
    pub filter_suffix: String,
    pub paging: Paging,
    pub nonce: String,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product_id: i64,
    pub card: ProductCard,
    pub description: String,
    pub stock: i64,
    pub guide_url: Option<String>,
    pub logged_in: bool,
    pub on_wishlist: bool,
    pub nonce: String,
}

/// Product listing with server-driven pagination and filters.
#[instrument(skip(state, nonce))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
    CspNonce(nonce): CspNonce,
) -> Result<ProductIndexTemplate> {
    let page = state.api().list_products(&query).await?;
    let categories = state.api().list_categories().await?;
    let filters = ActiveFilters::from_query(&query);
    let filter_suffix = filters.query_suffix();

    Ok(ProductIndexTemplate {
        products: page.items.iter().map(ProductCard::from).collect(),
        categories,
        filters,
        filter_suffix,
        paging: Paging::from_page(&page),
        nonce,
    })
}

/// Product detail page.
#[instrument(skip(state, auth, nonce), fields(handle = %handle))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    OptionalAuth(auth): OptionalAuth,
    CspNonce(nonce): CspNonce,
) -> Result<ProductShowTemplate> {
    let product: Product = state.api().get_product(&handle).await?;

    // Wishlist membership for the toggle button state
    let (logged_in, on_wishlist) = match &auth {
        Some(auth) => {
            let on_wishlist = state
                .api()
                .list_wishlist(auth.token.as_str())
                .await?
                .iter()
                .any(|entry| entry.product.id == product.id);
            (true, on_wishlist)
        }
        None => (false, false),
    };

    Ok(ProductShowTemplate {
        product_id: product.id.as_i64(),
        card: ProductCard::from(&product),
        description: product.description,
        stock: product.stock,
        guide_url: product.guide_url,
        logged_in,
        on_wishlist,
        nonce,
    })
}
