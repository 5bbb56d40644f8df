use thiserror::Error;

/// Failure of a single price lookup. Never cached; surfaced to users as [`PriceError::user_message`].
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Quote request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl PriceError {
    /// Reply text sent to the chat when a lookup fails.
    pub fn user_message(&self) -> &'static str {
        "Price lookup failed."
    }
}
