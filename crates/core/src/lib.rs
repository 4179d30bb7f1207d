//! Bristle Core - Shared types library.
//!
//! This crate provides common types used across all Bristle components:
//! - `storefront` - Public-facing e-commerce site
//! - `admin` - Internal back-office (staff-only)
//! - `cli` - Command-line tools for operational tasks
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere. All
//! authoritative values (prices, totals, stock, order state) originate at
//! the Platform API; these types mirror them for display and transport.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, discounts,
//!   emails, statuses, and pagination

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
