//! Cart domain error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur when mutating a cart.
#[derive(Error, Debug)]
pub enum CartError {
    /// A line item with this product id is already in the cart.
    #[error("Product already in cart: {0}")]
    DuplicateItem(ProductId),

    /// Quantity must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}
