//! CoinGecko `simple/price` client with an LRU cache over the joined id key.

use std::collections::HashMap;
use std::sync::Arc;

use moka::future::Cache;
use moka::policy::EvictionPolicy;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::config::PriceConfig;
use crate::error::PriceError;
use crate::format::format_prices;

/// Quote for one asset. Only the USD price is requested.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    pub usd: Option<f64>,
}

/// Decoded quote-service body: asset id → quote.
pub type QuoteTable = HashMap<String, Quote>;

/// Cache key for a lookup: ids joined with commas, lowercased. Order-sensitive.
pub fn cache_key(ids: &[String]) -> String {
    ids.join(",").to_lowercase()
}

/// Price lookup client. Clone is cheap; clones share the HTTP client and the cache.
#[derive(Clone)]
pub struct PriceClient {
    http: reqwest::Client,
    api_url: String,
    cache: Cache<String, Arc<QuoteTable>>,
}

impl PriceClient {
    /// Builds the HTTP client (with the configured timeout) and an empty LRU cache.
    pub fn new(config: &PriceConfig) -> Result<Self, PriceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PriceError::Client(e.to_string()))?;
        Ok(Self::with_http_client(http, config))
    }

    pub fn with_http_client(http: reqwest::Client, config: &PriceConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self {
            http,
            api_url: config.api_url.clone(),
            cache,
        }
    }

    /// Formatted price lines for `ids` (see [`format_prices`]).
    ///
    /// An id list made only of empty strings yields "No prices found." without a request.
    #[instrument(skip(self))]
    pub async fn get_prices(&self, ids: &[String]) -> Result<String, PriceError> {
        if ids.iter().all(|id| id.is_empty()) {
            return Ok(format_prices(ids, &QuoteTable::new()));
        }
        let table = self.quotes(&cache_key(ids)).await?;
        Ok(format_prices(ids, &table))
    }

    /// Raw quote table for a joined key, served from the cache when present.
    ///
    /// Only successful responses are cached; a failed fetch is returned and retried on the next call.
    pub async fn quotes(&self, key: &str) -> Result<Arc<QuoteTable>, PriceError> {
        if let Some(hit) = self.cache.get(key).await {
            debug!(key = %key, "Price cache hit");
            return Ok(hit);
        }

        let table = Arc::new(self.fetch(key).await.map_err(|e| {
            error!(key = %key, error = %e, "Price fetch error");
            e
        })?);
        self.cache.insert(key.to_string(), table.clone()).await;
        Ok(table)
    }

    async fn fetch(&self, key: &str) -> Result<QuoteTable, PriceError> {
        info!(key = %key, "Fetching prices from quote service");
        let table = self
            .http
            .get(&self.api_url)
            .query(&[("ids", key), ("vs_currencies", "usd")])
            .send()
            .await?
            .error_for_status()?
            .json::<QuoteTable>()
            .await?;
        debug!(key = %key, quotes = table.len(), "Quote service responded");
        Ok(table)
    }

    /// Approximate number of cached keys (moka applies pending writes lazily).
    pub async fn cached_keys(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
