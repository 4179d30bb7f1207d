//! Authentication extractors.
//!
//! The session carries the customer identity and Platform API token.
//! `RequireAuth` redirects browsers to login and returns 401 on `/api/`
//! paths; handlers never branch on authentication state themselves.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{AuthToken, CurrentCustomer, session_keys};

/// The authenticated customer plus the token for Platform API calls.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub customer: CurrentCustomer,
    pub token: AuthToken,
}

/// Extractor that requires a logged-in customer.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAuth(auth): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", auth.customer.name)
/// }
/// ```
pub struct RequireAuth(pub AuthContext);

/// Rejection when authentication is required but missing.
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

async fn read_auth(session: &Session) -> Option<AuthContext> {
    let customer: CurrentCustomer = session
        .get(session_keys::CURRENT_CUSTOMER)
        .await
        .ok()
        .flatten()?;
    let token: AuthToken = session.get(session_keys::AUTH_TOKEN).await.ok().flatten()?;
    Some(AuthContext { customer, token })
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The session is placed in extensions by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::Unauthorized)?;

        let auth = read_auth(session).await.ok_or_else(|| {
            if parts.uri.path().starts_with("/api/") {
                AuthRejection::Unauthorized
            } else {
                AuthRejection::RedirectToLogin
            }
        })?;

        Ok(Self(auth))
    }
}

/// Extractor that optionally gets the current customer.
///
/// Unlike `RequireAuth`, this never rejects the request.
pub struct OptionalAuth(pub Option<AuthContext>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = match parts.extensions.get::<Session>() {
            Some(session) => read_auth(session).await,
            None => None,
        };

        Ok(Self(auth))
    }
}

/// Store the customer and token in the session after login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_auth(
    session: &Session,
    customer: &CurrentCustomer,
    token: &AuthToken,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_CUSTOMER, customer)
        .await?;
    session.insert(session_keys::AUTH_TOKEN, token).await
}

/// Remove the customer and token from the session (logout, expiry).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_auth(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentCustomer>(session_keys::CURRENT_CUSTOMER)
        .await?;
    session.remove::<AuthToken>(session_keys::AUTH_TOKEN).await?;
    Ok(())
}
