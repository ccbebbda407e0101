//! Cart state engine for Shopcart.
//!
//! [`CartStore`] holds the user's cart in memory, mirrors it to a durable
//! key-value store after every successful mutation, and guards quantity
//! changes against the remote stock count. Collaborators are injected at
//! construction:
//!
//! - [`ProductCatalog`] — remote product metadata and stock lookups
//! - [`KeyValueStore`] — durable snapshot storage (from `shopcart-cache`)
//! - [`NotificationSink`] — user-facing error messages
//!
//! Operations never return errors to the caller: failures are terminal at
//! the operation boundary, surfaced through the notification sink and the
//! structured log.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopcart_cache::MemoryStore;
//! use shopcart_commerce::ProductId;
//! use shopcart_store::{CartStore, TracingSink};
//!
//! let store = CartStore::new(
//!     Arc::new(catalog),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(TracingSink),
//! );
//! store.hydrate().await;
//!
//! store.add_product(ProductId::new(5)).await;
//! assert_eq!(store.item_count().await, 1);
//! ```
//!
//! [`KeyValueStore`]: shopcart_cache::KeyValueStore

pub mod catalog;
pub mod error;
pub mod notify;
pub mod store;

pub use catalog::{CatalogError, ProductCatalog};
pub use error::StoreError;
pub use notify::{NotificationSink, TracingSink};
pub use store::{CartStore, OUT_OF_STOCK_MESSAGE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{CatalogError, ProductCatalog};
    pub use crate::error::StoreError;
    pub use crate::notify::{NotificationSink, TracingSink};
    pub use crate::store::CartStore;
    pub use shopcart_cache::prelude::*;
    pub use shopcart_commerce::prelude::*;
}
