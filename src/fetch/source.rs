use async_trait::async_trait;

use super::error::FetchError;
use crate::domain::{CartEntry, Product};

/// Source of the two raw collections consumed by the aggregator
///
/// Implemented by `HttpSource` for the store API; tests supply in-memory
/// implementations.
#[async_trait]
pub trait StoreSource: Send + Sync {
    /// Retrieve all cart entries
    async fn carts(&self) -> Result<Vec<CartEntry>, FetchError>;

    /// Retrieve the product catalog
    async fn products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Fetch carts and products concurrently, waiting for both
///
/// The two retrievals are independent. A failure in either fails the whole
/// extract step before the transform begins.
pub async fn extract_both<S: StoreSource>(
    source: &S,
) -> Result<(Vec<CartEntry>, Vec<Product>), FetchError> {
    tokio::try_join!(source.carts(), source.products())
}
