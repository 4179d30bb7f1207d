//! Staff authentication routes.

use askama::Template;
use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::forms::LoginForm;
use crate::middleware::{CspNonce, clear_staff_auth, set_staff_auth};
use crate::models::{CurrentStaff, StaffToken};
use crate::platform::{ApiError, FieldError};

/// Staff login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub errors: Vec<FieldError>,
    pub notice: Option<String>,
    pub nonce: String,
}

impl LoginTemplate {
    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// Set to "expired" by the centralized 401 redirect.
    pub session: Option<String>,
}

/// Display the login page, clearing stale auth state when reached through
/// the expired-session redirect.
#[instrument(skip(session, nonce))]
pub async fn login_page(
    Query(query): Query<LoginQuery>,
    session: Session,
    CspNonce(nonce): CspNonce,
) -> Result<Html<String>> {
    let notice = if query.session.as_deref() == Some("expired") {
        clear_staff_auth(&session).await?;
        Some("Your session has expired, please sign in again".to_string())
    } else {
        None
    };

    let template = LoginTemplate {
        email: String::new(),
        errors: Vec::new(),
        notice,
        nonce,
    };
    Ok(Html(template.render()?))
}

/// Login action.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<crate::state::AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    // Validate before any network call
    if let Err(errors) = form.validate() {
        let template = LoginTemplate {
            email: form.email,
            errors,
            notice: None,
            nonce,
        };
        return Ok(Html(template.render()?).into_response());
    }

    match state
        .api()
        .staff_login(form.email.trim(), &form.password)
        .await
    {
        Ok(auth) => {
            let staff = CurrentStaff {
                id: auth.staff.id,
                email: auth.staff.email,
                name: auth.staff.name,
                role: auth.staff.role,
            };
            set_staff_auth(&session, &staff, &StaffToken::new(auth.token)).await?;
            Ok(Redirect::to("/").into_response())
        }
        // A login 401 is a credentials failure, not an expired session
        Err(ApiError::Unauthorized) => {
            let template = LoginTemplate {
                email: form.email,
                errors: Vec::new(),
                notice: Some("Invalid email or password".to_string()),
                nonce,
            };
            Ok(Html(template.render()?).into_response())
        }
        Err(ApiError::Validation(errors)) => {
            let template = LoginTemplate {
                email: form.email,
                errors,
                notice: None,
                nonce,
            };
            Ok(Html(template.render()?).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Logout action. Token revocation is best-effort; the session is always
/// cleared.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<crate::state::AppState>,
    session: Session,
) -> Result<Response> {
    if let Ok(Some(token)) = session
        .get::<StaffToken>(crate::models::session_keys::STAFF_TOKEN)
        .await
        && let Err(e) = state.api().staff_logout(token.as_str()).await
    {
        tracing::warn!("Best-effort staff logout call failed: {e}");
    }

    clear_staff_auth(&session).await?;
    Ok(Redirect::to("/auth/login").into_response())
}
