//! The cart collection.

use crate::cart::LineItem;
use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// An ordered collection of line items, unique by product id.
///
/// Insertion order is preserved across mutations; removing an item never
/// reorders the remainder. The collection itself knows nothing about stock
/// limits — quantity policy lives with the caller.
///
/// Serializes transparently as a JSON array of line items, which is the
/// persisted snapshot format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product not yet in the cart, with quantity 1.
    ///
    /// Returns an error if a line item with the same product id already
    /// exists; incrementing an existing item goes through [`set_amount`].
    ///
    /// [`set_amount`]: Cart::set_amount
    pub fn insert_new(&mut self, product: Product) -> Result<(), CartError> {
        if self.contains(product.id) {
            return Err(CartError::DuplicateItem(product.id));
        }
        self.items.push(LineItem::new(product, 1)?);
        Ok(())
    }

    /// Set the quantity of an existing line item.
    ///
    /// Returns `true` if a matching item was updated; an absent id leaves
    /// the cart untouched and returns `false`. Other items pass through
    /// unchanged either way.
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> Result<bool, CartError> {
        if amount <= 0 {
            return Err(CartError::InvalidQuantity(amount));
        }
        match self.items.iter_mut().find(|i| i.product_id() == product_id) {
            Some(item) => {
                item.amount = amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the line item with the given product id.
    ///
    /// Returns `true` if an item was removed. Removing an absent id is a
    /// no-op; remaining items keep their order.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        self.items.len() < len_before
    }

    /// Get the line item for a product id.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Check whether a product id is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// All line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: 99.9,
            image: format!("https://cdn.example.com/{id}.jpg"),
        }
    }

    #[test]
    fn test_insert_new_starts_at_one() {
        let mut cart = Cart::new();
        cart.insert_new(product(5, "Runner")).unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(ProductId::new(5)).unwrap().amount, 1);
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut cart = Cart::new();
        cart.insert_new(product(5, "Runner")).unwrap();

        let err = cart.insert_new(product(5, "Runner")).unwrap_err();
        assert!(matches!(err, CartError::DuplicateItem(_)));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_amount_targets_only_match() {
        let mut cart = Cart::new();
        cart.insert_new(product(1, "Runner")).unwrap();
        cart.insert_new(product(2, "Classic")).unwrap();

        assert!(cart.set_amount(ProductId::new(2), 4).unwrap());

        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 1);
        assert_eq!(cart.get(ProductId::new(2)).unwrap().amount, 4);
    }

    #[test]
    fn test_set_amount_absent_id_is_untouched() {
        let mut cart = Cart::new();
        cart.insert_new(product(1, "Runner")).unwrap();
        let before = cart.clone();

        assert!(!cart.set_amount(ProductId::new(99), 3).unwrap());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_set_amount_rejects_non_positive() {
        let mut cart = Cart::new();
        cart.insert_new(product(1, "Runner")).unwrap();

        assert!(cart.set_amount(ProductId::new(1), 0).is_err());
        assert_eq!(cart.get(ProductId::new(1)).unwrap().amount, 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = Cart::new();
        cart.insert_new(product(1, "A")).unwrap();
        cart.insert_new(product(2, "B")).unwrap();
        cart.insert_new(product(3, "C")).unwrap();

        assert!(cart.remove(ProductId::new(2)));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product_id().value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.insert_new(product(1, "A")).unwrap();

        assert!(!cart.remove(ProductId::new(9)));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut cart = Cart::new();
        cart.insert_new(product(1, "A")).unwrap();
        cart.insert_new(product(2, "B")).unwrap();
        cart.set_amount(ProductId::new(2), 3).unwrap();

        let blob = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&blob).unwrap();

        assert_eq!(restored, cart);
        // Snapshot is a bare array of flat objects.
        assert!(blob.starts_with('['));
    }
}
