//! Shopping cart module.
//!
//! Contains the cart collection and its line items.

mod cart;
mod line_item;

pub use cart::Cart;
pub use line_item::LineItem;
