//! Session-held models for the admin panel.

mod session;

pub use session::{CurrentStaff, StaffToken, session_keys};
