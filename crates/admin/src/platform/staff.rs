//! Staff authentication and staff account management.

use serde::Serialize;

use bristle_core::StaffId;

use super::types::{StaffAuthSession, StaffMember, StaffPayload};
use super::{ApiClient, ApiError};

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange staff credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for bad credentials.
    pub async fn staff_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<StaffAuthSession, ApiError> {
        self.post_json(
            "/v1/staff/auth/login",
            &Credentials { email, password },
            None,
        )
        .await
    }

    /// Revoke the staff token. Best-effort; callers clear the session
    /// regardless.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the revocation call itself fails.
    pub async fn staff_logout(&self, token: &str) -> Result<(), ApiError> {
        self.delete("/v1/staff/auth/session", Some(token)).await
    }

    /// List all staff accounts.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on network failure or non-success status.
    pub async fn list_staff(&self, token: &str) -> Result<Vec<StaffMember>, ApiError> {
        self.get_json("/v1/admin/staff", &[], Some(token)).await
    }

    /// Create a staff account; the Platform API sends the invitation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with field errors on a 422, and
    /// `ApiError::Forbidden` when the token's role is not Manager.
    pub async fn create_staff(
        &self,
        token: &str,
        payload: &StaffPayload,
    ) -> Result<StaffMember, ApiError> {
        self.post_json("/v1/admin/staff", payload, Some(token)).await
    }

    /// Update a staff account (name, role).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` with field errors on a 422.
    pub async fn update_staff(
        &self,
        token: &str,
        id: StaffId,
        payload: &StaffPayload,
    ) -> Result<StaffMember, ApiError> {
        self.put_json(&format!("/v1/admin/staff/{id}"), payload, Some(token))
            .await
    }

    /// Delete a staff account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Forbidden` when the token's role is not Manager.
    pub async fn delete_staff(&self, token: &str, id: StaffId) -> Result<(), ApiError> {
        self.delete(&format!("/v1/admin/staff/{id}"), Some(token))
            .await
    }
}
