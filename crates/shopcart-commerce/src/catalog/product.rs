//! Product metadata.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Product metadata as reported by the remote catalog.
///
/// Everything except `id` is display-only: it is carried through the cart
/// and its persisted snapshot untouched. In particular `price` is never
/// used for arithmetic here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price as reported by the catalog.
    pub price: f64,
    /// Image URL.
    pub image: String,
}
