//! Message router: `price of <ids>` goes to the price client, anything else to the assistant.

use aget_core::{Handler, HandlerError, HandlerResponse, Message, Result};
use async_trait::async_trait;
use llm_client::{AssistantClient, AssistantError};
use price_client::{PriceClient, PriceError};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Substring that marks a price query.
pub const PRICE_TRIGGER: &str = "price of";

/// Where a message is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Identifiers after the last [`PRICE_TRIGGER`], trimmed and lowercased.
    Price(Vec<String>),
    /// The whole lowercased text.
    Ask(String),
}

/// Decides the route for `text` without doing any I/O.
pub fn classify(text: &str) -> Route {
    let lowered = text.to_lowercase();
    match lowered.rfind(PRICE_TRIGGER) {
        Some(idx) => {
            let tail = &lowered[idx + PRICE_TRIGGER.len()..];
            let ids = tail
                .trim()
                .split(',')
                .map(|id| id.trim().to_lowercase())
                .collect();
            Route::Price(ids)
        }
        None => Route::Ask(lowered),
    }
}

#[derive(Error, Debug)]
pub enum RouteError {
    #[error(transparent)]
    Price(#[from] PriceError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

impl RouteError {
    /// Literal reply text for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            RouteError::Price(e) => e.user_message(),
            RouteError::Assistant(e) => e.user_message(),
        }
    }
}

/// Stateless dispatcher over the two clients.
#[derive(Clone)]
pub struct MessageRouter {
    prices: PriceClient,
    assistant: AssistantClient,
}

impl MessageRouter {
    pub fn new(prices: PriceClient, assistant: AssistantClient) -> Self {
        Self { prices, assistant }
    }

    /// Returns the reply produced by the client the text routes to.
    #[instrument(skip(self, text))]
    pub async fn route(&self, text: &str) -> std::result::Result<String, RouteError> {
        match classify(text) {
            Route::Price(ids) => {
                info!(ids = ?ids, "step: routing to price lookup");
                Ok(self.prices.get_prices(&ids).await?)
            }
            Route::Ask(question) => {
                info!(question_len = question.len(), "step: routing to assistant");
                Ok(self.assistant.ask(&question).await?)
            }
        }
    }
}

/// Terminal handler: routes the message text and replies with the answer or the failure text.
pub struct RouterHandler {
    router: MessageRouter,
}

impl RouterHandler {
    pub fn new(router: MessageRouter) -> Self {
        Self { router }
    }
}

#[async_trait]
impl Handler for RouterHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.is_empty() {
            return Err(HandlerError::NoText.into());
        }
        let reply = match self.router.route(&message.content).await {
            Ok(text) => text,
            Err(e) => {
                warn!(user_id = message.user.id, error = %e, "Routing failed");
                e.user_message().to_string()
            }
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
