//! Price client configuration.

use std::time::Duration;

pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const DEFAULT_CACHE_CAPACITY: u64 = 100;

#[derive(Debug, Clone)]
pub struct PriceConfig {
    /// Full URL of the `simple/price` endpoint.
    pub api_url: String,
    /// Maximum number of distinct joined keys kept in the cache.
    pub cache_capacity: u64,
    /// Per-request timeout for the quote service.
    pub timeout: Duration,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_COINGECKO_API_URL.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            timeout: Duration::from_secs(10),
        }
    }
}

impl PriceConfig {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
