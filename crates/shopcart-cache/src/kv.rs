//! Key-Value store trait and in-memory backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::CacheError;

/// Durable key-value storage over string blobs.
///
/// Values are opaque strings; callers serialize before `set` and
/// deserialize after `get`. Implementations must tolerate overwrites —
/// the cart engine rewrites the same key after every mutation.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the blob stored under a key, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a blob under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key).await?.is_some())
    }
}

/// In-memory key-value store.
///
/// Backs tests and single-process sessions; contents vanish with the
/// process.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::Backend("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries()?.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.entries()?.contains_key(key))
    }
}

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust
/// use shopcart_cache::kv_key;
///
/// let key = kv_key!("shopcart", "cart");
/// assert_eq!(key, "shopcart:cart");
/// ```
#[macro_export]
macro_rules! kv_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert!(!store.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
        assert!(store.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        store.delete("k").await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), None);

        // Deleting again is fine.
        store.delete("k").await.unwrap();
    }

    #[test]
    fn test_kv_key_macro() {
        assert_eq!(kv_key!("shopcart", "cart"), "shopcart:cart");
        assert_eq!(kv_key!("session", "user", 42), "session:user:42");
    }
}
