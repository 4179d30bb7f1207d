//! Home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::api::types::ProductQuery;
use crate::error::Result;
use crate::middleware::{CspNonce, OptionalAuth};
use crate::state::AppState;
use crate::views::ProductCard;

/// Number of featured products shown on the home page.
const FEATURED_COUNT: u32 = 8;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Vec<ProductCard>,
    pub customer_name: Option<String>,
    pub nonce: String,
}

/// Display the home page with featured products.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(auth): OptionalAuth,
    CspNonce(nonce): CspNonce,
) -> Result<HomeTemplate> {
    let query = ProductQuery {
        featured: Some(true),
        per_page: Some(FEATURED_COUNT),
        ..Default::default()
    };
    let page = state.api().list_products(&query).await?;

    Ok(HomeTemplate {
        featured: page.items.iter().map(ProductCard::from).collect(),
        customer_name: auth.map(|a| a.customer.name),
        nonce,
    })
}
