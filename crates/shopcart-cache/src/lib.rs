//! Key-Value persistence layer for Shopcart.
//!
//! The cart engine mirrors its state to a durable key-value store after
//! every successful mutation. This crate defines the storage seam — an
//! async [`KeyValueStore`] trait over string blobs — plus an in-memory
//! implementation for tests and single-process use.
//!
//! # Example
//!
//! ```rust
//! use shopcart_cache::{KeyValueStore, MemoryStore};
//!
//! # async fn demo() -> Result<(), shopcart_cache::CacheError> {
//! let store = MemoryStore::new();
//!
//! store.set("shopcart:cart", "[]").await?;
//! let blob = store.get("shopcart:cart").await?;
//! assert_eq!(blob.as_deref(), Some("[]"));
//! # Ok(())
//! # }
//! ```

mod error;
mod kv;

pub use error::CacheError;
pub use kv::{KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, KeyValueStore, MemoryStore};
}
