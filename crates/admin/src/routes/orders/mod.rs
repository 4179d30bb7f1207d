//! Order management routes.

pub mod detail;
pub mod list;
