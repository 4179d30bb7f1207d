//! Cart route handlers (review step of the checkout wizard).
//!
//! Cart operations use HTMX fragments for dynamic updates. The cart ID is
//! held in the session; every response re-renders the server-computed cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use bristle_core::{CartItemId, ProductId};

use crate::api::ApiError;
use crate::middleware::CspNonce;
use crate::models::session_keys;
use crate::state::AppState;
use crate::views::CartView;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart ID from the session.
pub(crate) async fn get_cart_id(session: &Session) -> Option<String> {
    session
        .get::<String>(session_keys::CART_ID)
        .await
        .ok()
        .flatten()
}

/// Set the cart ID in the session.
async fn set_cart_id(
    session: &Session,
    cart_id: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART_ID, cart_id).await
}

/// Remove the cart ID from the session (after checkout).
pub(crate) async fn clear_cart_id(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session.remove::<String>(session_keys::CART_ID).await?;
    Ok(())
}

// =============================================================================
// Forms & Templates
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i64,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub item_id: i64,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub item_id: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub error: Option<String>,
    pub nonce: String,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
    pub error: Option<String>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Banner message for a rejected cart mutation.
fn mutation_error(err: &ApiError) -> String {
    match err {
        ApiError::Validation(errors) => errors
            .first()
            .map_or_else(|| "Could not update cart".to_string(), |e| e.message.clone()),
        ApiError::NotFound(_) => "This item is no longer available".to_string(),
        _ => "Could not update cart, please try again".to_string(),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page. A missing or expired cart renders the empty state.
#[instrument(skip(state, session, nonce))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
) -> impl IntoResponse {
    let cart = match get_cart_id(&session).await {
        Some(cart_id) => match state.api().get_cart(&cart_id).await {
            Ok(cart) => CartView::from(&cart),
            Err(e) => {
                tracing::warn!("Failed to fetch cart {cart_id}: {e}");
                CartView::empty()
            }
        },
        None => CartView::empty(),
    };

    CartShowTemplate {
        cart,
        error: None,
        nonce,
    }
}

/// Add item to cart (HTMX).
///
/// Creates a new cart on the first add, storing its ID in the session.
/// Returns the count badge fragment plus an HTMX trigger.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let product_id = ProductId::new(form.product_id);
    let quantity = form.quantity.unwrap_or(1).max(1);

    let result = match get_cart_id(&session).await {
        Some(cart_id) => state.api().add_item(&cart_id, product_id, quantity).await,
        None => state.api().create_cart(product_id, quantity).await,
    };

    match result {
        Ok(cart) => {
            if let Err(e) = set_cart_id(&session, &cart.id).await {
                tracing::error!("Failed to save cart ID to session: {e}");
            }

            (
                AppendHeaders([("HX-Trigger", "cart-updated")]),
                CartCountTemplate {
                    count: cart.item_count(),
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to add item to cart: {e}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(format!(
                    "<span class=\"cart-error\">{}</span>",
                    mutation_error(&e)
                )),
            )
                .into_response()
        }
    }
}

/// Update cart item quantity (HTMX).
///
/// A quantity below 1 is a no-op: the current cart is re-rendered without
/// any API call. Increments are sent as-is; the server may reject them on
/// insufficient stock, which surfaces as the banner error.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Response {
    let Some(cart_id) = get_cart_id(&session).await else {
        return CartItemsTemplate {
            cart: CartView::empty(),
            error: None,
        }
        .into_response();
    };

    // Decrement below 1 is a no-op; removal is an explicit action
    if form.quantity == 0 {
        return render_current(&state, &cart_id, None).await;
    }

    match state
        .api()
        .update_item(&cart_id, CartItemId::new(form.item_id), form.quantity)
        .await
    {
        Ok(cart) => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate {
                cart: CartView::from(&cart),
                error: None,
            },
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Cart update rejected: {e}");
            render_current(&state, &cart_id, Some(mutation_error(&e))).await
        }
    }
}

/// Remove item from cart (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    let Some(cart_id) = get_cart_id(&session).await else {
        return CartItemsTemplate {
            cart: CartView::empty(),
            error: None,
        }
        .into_response();
    };

    match state
        .api()
        .remove_item(&cart_id, CartItemId::new(form.item_id))
        .await
    {
        Ok(cart) => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate {
                cart: CartView::from(&cart),
                error: None,
            },
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to remove from cart: {e}");
            render_current(&state, &cart_id, Some(mutation_error(&e))).await
        }
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let count = match get_cart_id(&session).await {
        Some(cart_id) => state
            .api()
            .get_cart(&cart_id)
            .await
            .map(|cart| cart.item_count())
            .unwrap_or(0),
        None => 0,
    };

    CartCountTemplate { count }
}

/// Re-fetch and render the current cart, optionally with a banner error.
async fn render_current(state: &AppState, cart_id: &str, error: Option<String>) -> Response {
    let cart = match state.api().get_cart(cart_id).await {
        Ok(cart) => CartView::from(&cart),
        Err(e) => {
            tracing::warn!("Failed to re-fetch cart {cart_id}: {e}");
            CartView::empty()
        }
    };

    CartItemsTemplate { cart, error }.into_response()
}
