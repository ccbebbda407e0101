//! Remote product catalog seam.

use async_trait::async_trait;
use shopcart_commerce::{Product, ProductId, StockLevel};
use thiserror::Error;

/// Errors a catalog lookup can produce.
///
/// The cart engine treats every variant the same way (a failed operation);
/// the distinction exists for logging and for catalog implementations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to reach the catalog.
    #[error("Request failed: {0}")]
    Request(String),

    /// The catalog answered with an error status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse the catalog's response.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Remote product catalog: metadata and stock lookups by product id.
///
/// Both lookups are independent remote fetches and may fail for network
/// or server reasons.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch product metadata.
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetch the current stock level.
    async fn stock(&self, id: ProductId) -> Result<StockLevel, CatalogError>;
}
