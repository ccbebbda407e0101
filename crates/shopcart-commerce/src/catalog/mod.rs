//! Catalog types.
//!
//! Product metadata and stock levels as reported by the remote catalog.

mod product;
mod stock;

pub use product::Product;
pub use stock::StockLevel;
