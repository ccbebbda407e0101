//! The cart store: stock-checked mutations with write-through persistence.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use shopcart_cache::{kv_key, KeyValueStore};
use shopcart_commerce::{Cart, LineItem, ProductId};

use crate::catalog::ProductCatalog;
use crate::error::StoreError;
use crate::notify::NotificationSink;

/// Notification shown when a requested quantity exceeds available stock.
pub const OUT_OF_STOCK_MESSAGE: &str = "Requested quantity is out of stock";

const ADD_FAILED_MESSAGE: &str = "Failed to add product";
const REMOVE_FAILED_MESSAGE: &str = "Failed to remove product";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update product quantity";

/// In-memory cart with injected collaborators and write-through persistence.
///
/// Every operation runs under a single async mutex, so overlapping calls on
/// the same store are serialized and cannot lose updates. The in-memory
/// cart is the source of truth; storage is a mirror rewritten after each
/// successful mutation. Mutations commit only after the snapshot write
/// succeeds, so memory and storage cannot drift.
///
/// Operations do not return errors. An out-of-stock rejection surfaces the
/// dedicated message through the [`NotificationSink`]; any other failure
/// surfaces the operation's generic message, and the cart keeps its prior
/// state either way.
pub struct CartStore<C, K, N> {
    catalog: Arc<C>,
    storage: Arc<K>,
    notifier: Arc<N>,
    storage_key: String,
    cart: Mutex<Cart>,
}

impl<C, K, N> CartStore<C, K, N>
where
    C: ProductCatalog,
    K: KeyValueStore,
    N: NotificationSink,
{
    /// Create a store with an empty cart under the default storage key.
    pub fn new(catalog: Arc<C>, storage: Arc<K>, notifier: Arc<N>) -> Self {
        Self {
            catalog,
            storage,
            notifier,
            storage_key: kv_key!("shopcart", "cart"),
            cart: Mutex::new(Cart::new()),
        }
    }

    /// Override the storage key the snapshot is kept under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Seed the in-memory cart from the persisted snapshot.
    ///
    /// A missing key leaves the cart empty. A storage failure or a
    /// malformed blob is logged and the cart starts empty; construction
    /// never fails.
    pub async fn hydrate(&self) {
        let blob = match self.storage.get(&self.storage_key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(err) => {
                warn!(error = %err, "failed to read persisted cart, starting empty");
                return;
            }
        };

        match serde_json::from_str::<Cart>(&blob) {
            Ok(persisted) => {
                let mut cart = self.cart.lock().await;
                debug!(items = persisted.unique_item_count(), "cart hydrated from storage");
                *cart = persisted;
            }
            Err(err) => {
                warn!(error = %err, "persisted cart is malformed, starting empty");
            }
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// Fetches product metadata and stock, then either inserts a new line
    /// item with quantity 1 or increments the existing one. The increment
    /// is rejected when it would exceed stock; the first insert takes the
    /// single unit on trust without a stock comparison.
    pub async fn add_product(&self, product_id: ProductId) {
        let mut cart = self.cart.lock().await;
        if let Err(err) = self.try_add(&mut cart, product_id).await {
            self.report(&err, ADD_FAILED_MESSAGE);
        }
    }

    /// Remove a product's line item from the cart.
    ///
    /// Removing an id that is not in the cart is a silent no-op; the
    /// snapshot is rewritten either way.
    pub async fn remove_product(&self, product_id: ProductId) {
        let mut cart = self.cart.lock().await;
        if let Err(err) = self.try_remove(&mut cart, product_id).await {
            self.report(&err, REMOVE_FAILED_MESSAGE);
        }
    }

    /// Set a product's quantity to an exact value.
    ///
    /// A non-positive amount is a silent no-op: no fetch, no notification,
    /// no state change. Otherwise the amount is validated against stock and
    /// applied to the matching line item; an absent id leaves the cart
    /// identical.
    pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) {
        if amount <= 0 {
            return;
        }
        let mut cart = self.cart.lock().await;
        if let Err(err) = self.try_update(&mut cart, product_id, amount).await {
            self.report(&err, UPDATE_FAILED_MESSAGE);
        }
    }

    /// Cloned snapshot of the line items, in insertion order.
    pub async fn items(&self) -> Vec<LineItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Total item count (sum of quantities).
    pub async fn item_count(&self) -> i64 {
        self.cart.lock().await.item_count()
    }

    /// Check if the cart is empty.
    pub async fn is_empty(&self) -> bool {
        self.cart.lock().await.is_empty()
    }

    async fn try_add(&self, cart: &mut Cart, product_id: ProductId) -> Result<(), StoreError> {
        let product = self.catalog.product(product_id).await?;
        let stock = self.catalog.stock(product_id).await?;

        let mut next = cart.clone();
        match next.get(product_id).map(|item| item.amount) {
            Some(current) => {
                let desired = current + 1;
                if !stock.can_fulfill(desired) {
                    return Err(StoreError::OutOfStock {
                        product_id,
                        requested: desired,
                        available: stock.amount,
                    });
                }
                next.set_amount(product_id, desired)?;
            }
            // Stock is not consulted on a first insert; only increments
            // are checked.
            None => next.insert_new(product)?,
        }

        self.persist(&next).await?;
        *cart = next;
        debug!(%product_id, "product added to cart");
        Ok(())
    }

    async fn try_remove(&self, cart: &mut Cart, product_id: ProductId) -> Result<(), StoreError> {
        let mut next = cart.clone();
        let removed = next.remove(product_id);

        self.persist(&next).await?;
        *cart = next;
        if removed {
            debug!(%product_id, "product removed from cart");
        }
        Ok(())
    }

    async fn try_update(
        &self,
        cart: &mut Cart,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), StoreError> {
        let stock = self.catalog.stock(product_id).await?;
        if !stock.can_fulfill(amount) {
            return Err(StoreError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = cart.clone();
        let updated = next.set_amount(product_id, amount)?;

        self.persist(&next).await?;
        *cart = next;
        if updated {
            debug!(%product_id, amount, "cart quantity updated");
        }
        Ok(())
    }

    async fn persist(&self, cart: &Cart) -> Result<(), StoreError> {
        let blob = serde_json::to_string(cart)?;
        self.storage.set(&self.storage_key, &blob).await?;
        Ok(())
    }

    fn report(&self, err: &StoreError, fallback: &str) {
        match err {
            StoreError::OutOfStock {
                product_id,
                requested,
                available,
            } => {
                warn!(%product_id, requested, available, "requested quantity exceeds stock");
                self.notifier.error(OUT_OF_STOCK_MESSAGE);
            }
            other => {
                error!(error = %other, "cart operation failed");
                self.notifier.error(fallback);
            }
        }
    }
}
