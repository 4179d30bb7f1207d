//! Staff authentication extractors.
//!
//! `RequireStaffAuth` gates every back-office screen; `RequireManager`
//! additionally checks the role for staff and user management. The Platform
//! API enforces roles server-side too; these extractors only decide what to
//! render.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentStaff, StaffToken, session_keys};

/// The authenticated staff member plus their Platform API token.
#[derive(Clone)]
pub struct StaffContext {
    pub staff: CurrentStaff,
    pub token: StaffToken,
}

/// Extractor that requires a signed-in staff member.
pub struct RequireStaffAuth(pub StaffContext);

/// Extractor that requires a signed-in staff member with the Manager role.
pub struct RequireManager(pub StaffContext);

/// Rejection for failed staff auth.
pub enum StaffAuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
    /// Signed in, but the role is insufficient.
    Forbidden,
}

impl IntoResponse for StaffAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/auth/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "Only managers can access this resource",
            )
                .into_response(),
        }
    }
}

async fn read_staff(parts: &mut Parts) -> Result<StaffContext, StaffAuthRejection> {
    // Session is set in extensions by SessionManagerLayer
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(StaffAuthRejection::Unauthorized)?;

    let rejection = || {
        if parts.uri.path().starts_with("/api/") {
            StaffAuthRejection::Unauthorized
        } else {
            StaffAuthRejection::RedirectToLogin
        }
    };

    let staff: CurrentStaff = session
        .get(session_keys::CURRENT_STAFF)
        .await
        .ok()
        .flatten()
        .ok_or_else(rejection)?;

    let token: StaffToken = session
        .get(session_keys::STAFF_TOKEN)
        .await
        .ok()
        .flatten()
        .ok_or_else(rejection)?;

    Ok(StaffContext { staff, token })
}

impl<S> FromRequestParts<S> for RequireStaffAuth
where
    S: Send + Sync,
{
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        read_staff(parts).await.map(Self)
    }
}

impl<S> FromRequestParts<S> for RequireManager
where
    S: Send + Sync,
{
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = read_staff(parts).await?;
        if !context.staff.is_manager() {
            return Err(StaffAuthRejection::Forbidden);
        }
        Ok(Self(context))
    }
}

/// Store the staff identity and token in the session after login.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_staff_auth(
    session: &Session,
    staff: &CurrentStaff,
    token: &StaffToken,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_STAFF, staff).await?;
    session.insert(session_keys::STAFF_TOKEN, token).await?;
    Ok(())
}

/// Clear the staff identity and token from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_staff_auth(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentStaff>(session_keys::CURRENT_STAFF)
        .await?;
    session.remove::<StaffToken>(session_keys::STAFF_TOKEN).await?;
    Ok(())
}
