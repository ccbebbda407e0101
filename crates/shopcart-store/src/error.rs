//! Cart engine error types.

use shopcart_cache::CacheError;
use shopcart_commerce::{CartError, ProductId};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur inside a cart operation.
///
/// None of these reach callers: the operation boundary maps `OutOfStock`
/// to its dedicated notification and everything else to the operation's
/// generic failure message.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Requested quantity exceeds available stock.
    #[error("Out of stock for product {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Snapshot storage failed.
    #[error(transparent)]
    Storage(#[from] CacheError),

    /// Snapshot serialization failed.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Cart collection invariant violated.
    #[error(transparent)]
    Cart(#[from] CartError),
}
