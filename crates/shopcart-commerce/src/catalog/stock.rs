//! Stock level reported by the remote catalog.

use serde::{Deserialize, Serialize};

/// Available stock for a product.
///
/// An external fact fetched on demand, never stored locally. The catalog
/// reports a non-negative count of units available for purchase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StockLevel {
    /// Units available.
    pub amount: i64,
}

impl StockLevel {
    /// Create a stock level.
    pub const fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, requested: i64) -> bool {
        requested <= self.amount
    }

    /// Check if no units are available.
    pub fn is_out_of_stock(&self) -> bool {
        self.amount <= 0
    }
}
