//! Cart line item.

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A line item in the cart: one product plus the quantity selected.
///
/// The product fields are flattened so a serialized line item reads as a
/// single object (`{id, name, price, image, amount}`), which is the shape
/// the persisted cart snapshot uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased (denormalized catalog metadata).
    #[serde(flatten)]
    pub product: Product,
    /// Quantity in the cart. Always >= 1.
    pub amount: i64,
}

impl LineItem {
    /// Create a new line item.
    ///
    /// Returns an error if the quantity is not positive.
    pub fn new(product: Product, amount: i64) -> Result<Self, CartError> {
        if amount <= 0 {
            return Err(CartError::InvalidQuantity(amount));
        }
        Ok(Self { product, amount })
    }

    /// The product id this line item is keyed by.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(9),
            name: "Court Classic".to_string(),
            price: 139.9,
            image: "https://cdn.example.com/court-classic.jpg".to_string(),
        }
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(LineItem::new(product(), 0).is_err());
        assert!(LineItem::new(product(), -1).is_err());
    }

    #[test]
    fn test_serializes_flat() {
        let item = LineItem::new(product(), 2).unwrap();
        let json = serde_json::to_value(&item).unwrap();

        // One flat object, not {product: {...}, amount: n}.
        assert_eq!(json["id"], 9);
        assert_eq!(json["name"], "Court Classic");
        assert_eq!(json["amount"], 2);
        assert!(json.get("product").is_none());
    }
}
