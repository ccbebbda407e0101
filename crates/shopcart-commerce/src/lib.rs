//! Cart and catalog domain types for Shopcart.
//!
//! This crate holds the pure, I/O-free core of the cart engine:
//!
//! - **Catalog**: product metadata and stock levels as reported by the
//!   remote catalog
//! - **Cart**: an ordered collection of line items, unique by product id
//!
//! # Example
//!
//! ```rust
//! use shopcart_commerce::prelude::*;
//!
//! let sneaker = Product {
//!     id: ProductId::new(1),
//!     name: "Trail Runner".to_string(),
//!     price: 179.9,
//!     image: "https://cdn.example.com/trail-runner.jpg".to_string(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.insert_new(sneaker).unwrap();
//! assert_eq!(cart.item_count(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;

pub use cart::{Cart, LineItem};
pub use catalog::{Product, StockLevel};
pub use error::CartError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem};
    pub use crate::catalog::{Product, StockLevel};
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
}
