//! Cache types for catalog responses.

use bristle_core::Page;

use super::types::{Category, Product};

/// Cached value types. Only catalog reads are cached; carts, profiles,
/// wishlists, and orders are always fetched fresh.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Products(Page<Product>),
    Categories(Vec<Category>),
}
