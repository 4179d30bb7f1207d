//! Checkout wizard: details and confirmation steps.
//!
//! The wizard is strictly forward-advancing: `cart → details → complete`.
//! Reaching `/checkout` with an empty cart redirects back to `/cart`,
//! submission requires the marker set by the details page, and the
//! confirmation page requires the marker set by a successful submission.
//! The order payload is posted exactly once per successful submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use bristle_core::OrderId;

use crate::api::types::Order;
use crate::api::{ApiError, FieldError};
use crate::error::{AppError, Result};
use crate::forms::CheckoutForm;
use crate::middleware::{CspNonce, OptionalAuth};
use crate::models::{CheckoutStep, session_keys};
use crate::state::AppState;
use crate::views::{CartView, OrderView};

/// Session key for the confirmation rendered on the complete step. Stored
/// at submission time so guests can see their summary without a token.
const ORDER_CONFIRMATION: &str = "order_confirmation";

/// Checkout details template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/details.html")]
pub struct CheckoutDetailsTemplate {
    pub cart: CartView,
    pub form: CheckoutForm,
    pub errors: Vec<FieldError>,
    pub nonce: String,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/complete.html")]
pub struct CheckoutCompleteTemplate {
    pub order: OrderView,
    pub nonce: String,
}

impl CheckoutDetailsTemplate {
    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Details step. Requires a non-empty cart; pre-fills contact fields from
/// the logged-in profile (awaited before rendering).
#[instrument(skip_all)]
pub async fn details_page(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(auth): OptionalAuth,
    CspNonce(nonce): CspNonce,
) -> Result<Response> {
    let Some(cart_id) = super::cart::get_cart_id(&session).await else {
        return Ok(Redirect::to("/cart").into_response());
    };

    let cart = match state.api().get_cart(&cart_id).await {
        Ok(cart) if !cart.is_empty() => cart,
        _ => return Ok(Redirect::to("/cart").into_response()),
    };

    // Pre-fill from the profile; a failed fetch falls back to blank fields,
    // except an expired token which redirects through login centrally.
    let mut form = CheckoutForm::default();
    if let Some(auth) = auth {
        match state.api().get_profile(auth.token.as_str()).await {
            Ok(profile) => {
                form.email = profile.email.to_string();
                form.name = profile.name;
                form.phone = profile.phone.unwrap_or_default();
            }
            Err(ApiError::Unauthorized) => return Err(AppError::SessionExpired),
            Err(e) => tracing::warn!("Profile prefill failed: {e}"),
        }
    }

    session
        .insert(session_keys::CHECKOUT_STEP, CheckoutStep::Details)
        .await?;

    Ok(CheckoutDetailsTemplate {
        cart: CartView::from(&cart),
        form,
        errors: Vec::new(),
        nonce,
    }
    .into_response())
}

/// Whether the session has reached the details step. A stale or
/// resubmitted form (marker absent, or already advanced to `Complete`)
/// restarts the wizard at the details page instead of placing an order.
fn details_reached(step: Option<&CheckoutStep>) -> bool {
    matches!(step, Some(CheckoutStep::Details))
}

/// Submit the details form and place the order.
///
/// Local validation failures re-render the form without any network call;
/// server 422 field errors merge into the same inline display. On success
/// the session cart is cleared and the wizard advances to the
/// confirmation.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(auth): OptionalAuth,
    CspNonce(nonce): CspNonce,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let Some(cart_id) = super::cart::get_cart_id(&session).await else {
        return Ok(Redirect::to("/cart").into_response());
    };

    let step: Option<CheckoutStep> = session.get(session_keys::CHECKOUT_STEP).await.ok().flatten();
    if !details_reached(step.as_ref()) {
        return Ok(Redirect::to("/checkout").into_response());
    }

    let render_with_errors = |cart: CartView, form: CheckoutForm, errors: Vec<FieldError>| {
        CheckoutDetailsTemplate {
            cart,
            form,
            errors,
            nonce,
        }
        .into_response()
    };

    // Validate before any network call
    if let Err(errors) = form.validate() {
        let cart = match state.api().get_cart(&cart_id).await {
            Ok(cart) => CartView::from(&cart),
            Err(_) => CartView::empty(),
        };
        return Ok(render_with_errors(cart, form, errors));
    }

    let token = auth.as_ref().map(|a| a.token.as_str().to_string());
    let payload = form.clone().into_payload(cart_id.clone());

    match state.api().place_order(token.as_deref(), &payload).await {
        Ok(order) => {
            // Advance the wizard and drop the consumed cart
            super::cart::clear_cart_id(&session).await?;
            session
                .insert(
                    session_keys::CHECKOUT_STEP,
                    CheckoutStep::Complete { order_id: order.id },
                )
                .await?;
            session.insert(ORDER_CONFIRMATION, &order).await?;

            Ok(Redirect::to(&format!("/checkout/complete/{}", order.id)).into_response())
        }
        Err(ApiError::Validation(errors)) => {
            let cart = match state.api().get_cart(&cart_id).await {
                Ok(cart) => CartView::from(&cart),
                Err(_) => CartView::empty(),
            };
            Ok(render_with_errors(cart, form, errors))
        }
        Err(e) => Err(e.into()),
    }
}

/// Confirmation step. Requires the session marker set by a successful
/// submission for this exact order; anything else restarts at the cart.
#[instrument(skip(session, nonce))]
pub async fn complete(
    Path(order_id): Path<i64>,
    session: Session,
    CspNonce(nonce): CspNonce,
) -> Result<Response> {
    let order_id = OrderId::new(order_id);

    let step: Option<CheckoutStep> = session.get(session_keys::CHECKOUT_STEP).await.ok().flatten();
    if step != Some(CheckoutStep::Complete { order_id }) {
        return Ok(Redirect::to("/cart").into_response());
    }

    let Some(order) = session.get::<Order>(ORDER_CONFIRMATION).await.ok().flatten() else {
        return Ok(Redirect::to("/cart").into_response());
    };

    Ok(CheckoutCompleteTemplate {
        order: OrderView::from(&order),
        nonce,
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_requires_the_details_marker() {
        assert!(details_reached(Some(&CheckoutStep::Details)));

        // Fresh session: the details page was never rendered
        assert!(!details_reached(None));

        // Back-button resubmission after a placed order
        let placed = CheckoutStep::Complete {
            order_id: OrderId::new(7),
        };
        assert!(!details_reached(Some(&placed)));
    }
}

