//! # Price lookup client
//!
//! Maps asset identifiers to USD prices via a CoinGecko-compatible `simple/price` endpoint.
//! Raw lookups are cached per joined identifier key ([`cache_key`]) in a fixed-capacity LRU cache
//! with no time-based expiry; formatting into reply lines happens after the cache.

mod client;
mod config;
mod error;
mod format;

pub use client::{cache_key, PriceClient, Quote, QuoteTable};
pub use config::{PriceConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_COINGECKO_API_URL};
pub use error::PriceError;
pub use format::{format_prices, NO_PRICES_FOUND};
