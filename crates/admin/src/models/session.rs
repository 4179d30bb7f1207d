//! Session data types for the logged-in staff member.

use serde::{Deserialize, Serialize};

use bristle_core::{Email, StaffId, StaffRole};

/// Session keys. Fixed strings so a code change never silently signs
/// everyone out by renaming a key.
pub mod session_keys {
    /// The logged-in staff member.
    pub const CURRENT_STAFF: &str = "current_staff";
    /// The Platform API bearer token for the staff member.
    pub const STAFF_TOKEN: &str = "staff_token";
}

/// The staff member attached to the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStaff {
    pub id: StaffId,
    pub email: Email,
    pub name: String,
    pub role: StaffRole,
}

impl CurrentStaff {
    /// Managers may manage staff accounts and delete users.
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.role == StaffRole::Manager
    }
}

/// Bearer token for Platform API staff calls, held in the session.
///
/// Wrapped so the token never appears in `Debug` output of session state.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffToken(String);

impl StaffToken {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self(token)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for StaffToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StaffToken([REDACTED])")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_staff_token_debug_redacted() {
        let token = StaffToken::new("tok-abc123".to_string());
        assert_eq!(format!("{token:?}"), "StaffToken([REDACTED])");
        assert_eq!(token.as_str(), "tok-abc123");
    }

    #[test]
    fn test_manager_check() {
        let staff = CurrentStaff {
            id: StaffId::new(1),
            email: Email::from_str("ops@bristle.shop").unwrap(),
            name: "Sam".to_string(),
            role: StaffRole::Manager,
        };
        assert!(staff.is_manager());

        let viewer = CurrentStaff {
            role: StaffRole::Viewer,
            ..staff
        };
        assert!(!viewer.is_manager());
    }

    #[test]
    fn test_current_staff_roundtrip() {
        let staff = CurrentStaff {
            id: StaffId::new(7),
            email: Email::from_str("staff@bristle.shop").unwrap(),
            name: "Avery".to_string(),
            role: StaffRole::Staff,
        };
        let json = serde_json::to_string(&staff).unwrap();
        let back: CurrentStaff = serde_json::from_str(&json).unwrap();
        assert_eq!(staff, back);
    }
}
