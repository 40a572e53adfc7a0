use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::error::FetchError;
use super::records::{RawCartRecord, RawProductRecord};
use super::source::StoreSource;
use crate::domain::{CartEntry, Product};

/// Request timeout for the store API (reqwest has no default)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Store API client over HTTP GET endpoints returning JSON arrays
pub struct HttpSource {
    client: reqwest::Client,
    carts_url: String,
    products_url: String,
    paginate_carts: bool,
}

impl HttpSource {
    /// Create a client for the given cart and product endpoints
    pub fn new(
        carts_url: impl Into<String>,
        products_url: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            carts_url: carts_url.into(),
            products_url: products_url.into(),
            paginate_carts: false,
        })
    }

    /// Page through the cart endpoint instead of issuing a single request
    pub fn with_pagination(mut self) -> Self {
        self.paginate_carts = true;
        self
    }

    /// GET one JSON array, optionally with a page query parameter
    async fn get_records<T: DeserializeOwned>(
        &self,
        url: &str,
        page: Option<u32>,
    ) -> Result<Vec<T>, FetchError> {
        let mut request = self.client.get(url);
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status {
                endpoint: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Request successive pages starting at 1 until an empty page comes back
    ///
    /// There is no upper bound on the page count; a source that never
    /// returns an empty page grows memory without limit.
    async fn get_all_pages<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, FetchError> {
        let mut all = Vec::new();
        let mut page = 1u32;

        loop {
            let records: Vec<T> = self.get_records(url, Some(page)).await?;
            if records.is_empty() {
                break;
            }
            debug!(page, records = records.len(), "fetched page");
            all.extend(records);
            page += 1;
        }

        Ok(all)
    }
}

#[async_trait]
impl StoreSource for HttpSource {
    async fn carts(&self) -> Result<Vec<CartEntry>, FetchError> {
        let raw: Vec<RawCartRecord> = if self.paginate_carts {
            self.get_all_pages(&self.carts_url).await?
        } else {
            self.get_records(&self.carts_url, None).await?
        };

        info!(records = raw.len(), "fetched cart entries");
        Ok(raw.into_iter().map(CartEntry::from).collect())
    }

    async fn products(&self) -> Result<Vec<Product>, FetchError> {
        let raw: Vec<RawProductRecord> = self.get_records(&self.products_url, None).await?;

        info!(records = raw.len(), "fetched products");
        Ok(raw.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_starts_without_pagination() {
        let source = HttpSource::new("https://store.example/carts", "https://store.example/products")
            .unwrap();

        assert!(!source.paginate_carts);
        assert_eq!(source.carts_url, "https://store.example/carts");
        assert_eq!(source.products_url, "https://store.example/products");
    }

    #[test]
    fn with_pagination_enables_paging() {
        let source = HttpSource::new("https://store.example/carts", "https://store.example/products")
            .unwrap()
            .with_pagination();

        assert!(source.paginate_carts);
    }
}
