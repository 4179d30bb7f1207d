//! Domain models for the storefront.

pub mod session;

pub use session::{AuthToken, CheckoutStep, CurrentCustomer, keys as session_keys};
