//! Middleware and extractors for the admin panel.

pub mod auth;
pub mod csp;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{RequireManager, RequireStaffAuth, StaffContext, clear_staff_auth, set_staff_auth};
pub use csp::{CspNonce, csp_nonce_middleware};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
