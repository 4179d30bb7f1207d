//! Customer authentication routes.
//!
//! Login exchanges credentials for a Platform API bearer token and stores
//! the token plus the customer identity in the session. Logout calls the
//! API best-effort and always clears the session regardless of the result.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::api::types::AuthSession;
use crate::api::{ApiError, FieldError};
use crate::error::Result;
use crate::forms::{LoginForm, RegisterForm};
use crate::middleware::{CspNonce, clear_auth, set_auth};
use crate::models::{AuthToken, CurrentCustomer};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub errors: Vec<FieldError>,
    /// Banner message (bad credentials, expired session).
    pub notice: Option<String>,
    pub nonce: String,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub email: String,
    pub name: String,
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

impl RegisterTemplate {
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

async fn establish(session: &Session, auth: AuthSession) -> Result<()> {
    let customer = CurrentCustomer {
        id: auth.user.id,
        email: auth.user.email,
        name: auth.user.name,
    };
    set_auth(session, &customer, &AuthToken::new(auth.token)).await?;
    Ok(())
}

/// Display the login page.
///
/// When reached through the expired-session redirect, stale auth state is
/// cleared here before rendering.
#[instrument(skip(session, nonce))]
pub async fn login_page(
    Query(query): Query<LoginQuery>,
    session: Session,
    CspNonce(nonce): CspNonce,
) -> Result<LoginTemplate> {
    let notice = if query.session.as_deref() == Some("expired") {
        clear_auth(&session).await?;
        Some("Your session has expired, please sign in again".to_string())
    } else {
        None
    };

    Ok(LoginTemplate {
        email: String::new(),
        errors: Vec::new(),
        notice,
        nonce,
    })
}

/// Login action.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    // Validate before any network call
    if let Err(errors) = form.validate() {
        return Ok(LoginTemplate {
            email: form.email,
            errors,
            notice: None,
            nonce,
        }
        .into_response());
    }

    match state.api().login(form.email.trim(), &form.password).await {
        Ok(auth) => {
            establish(&session, auth).await?;
            Ok(Redirect::to("/account").into_response())
        }
        // A login 401 is a credentials failure, not an expired session
        Err(ApiError::Unauthorized) => Ok(LoginTemplate {
            email: form.email,
            errors: Vec::new(),
            notice: Some("Invalid email or password".to_string()),
            nonce,
        }
        .into_response()),
        Err(ApiError::Validation(errors)) => Ok(LoginTemplate {
            email: form.email,
            errors,
            notice: None,
            nonce,
        }
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Display the registration page.
#[instrument(skip(nonce))]
pub async fn register_page(CspNonce(nonce): CspNonce) -> RegisterTemplate {
    RegisterTemplate {
        email: String::new(),
        name: String::new(),
        errors: Vec::new(),
        notice: None,
        nonce,
    }
}

/// Registration action.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    // Validate before any network call
    if let Err(errors) = form.validate() {
        return Ok(RegisterTemplate {
            email: form.email,
            name: form.name,
            errors,
            notice: None,
            nonce,
        }
        .into_response());
    }

    match state
        .api()
        .register(form.email.trim(), &form.password, form.name.trim())
        .await
    {
        Ok(auth) => {
            establish(&session, auth).await?;
            Ok(Redirect::to("/account").into_response())
        }
        Err(ApiError::Validation(errors)) => Ok(RegisterTemplate {
            email: form.email,
            name: form.name,
            errors,
            notice: None,
            nonce,
        }
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Logout action. The Platform API call is best-effort; the session is
/// always cleared.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Response> {
    if let Ok(Some(token)) = session
        .get::<crate::models::AuthToken>(crate::models::session_keys::AUTH_TOKEN)
        .await
        && let Err(e) = state.api().logout(token.as_str()).await
    {
        tracing::warn!("Best-effort logout call failed: {e}");
    }

    clear_auth(&session).await?;
    Ok(Redirect::to("/").into_response())
}
