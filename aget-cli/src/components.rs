//! Component factory: builds BotComponents from config. Isolates assembly logic from main.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use handlers::{
    CommandHandler, LoggingHandler, MessageRouter, RateLimitHandler, RateLimiter, RouterHandler,
};
use llm_client::{AssistantClient, LlmClient, OpenAILlmClient};
use price_client::PriceClient;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Everything a run mode needs: the teloxide bot and the handler chain.
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub handler_chain: HandlerChain,
}

/// Chain order: logging, rate limit, commands, router. Rate limiting runs before any command
/// or lookup so `/start` and `/help` count toward the window too.
pub fn build_handler_chain(router: MessageRouter, rate_limiter: Arc<RateLimiter>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(RateLimitHandler::new(rate_limiter)))
        .add_handler(Arc::new(CommandHandler))
        .add_handler(Arc::new(RouterHandler::new(router)))
}

/// Builds the price client, assistant, rate limiter, handler chain and teloxide bot.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let prices = PriceClient::new(&config.price).context("Failed to build price client")?;

    let llm = OpenAILlmClient::new(&config.llm)?;
    info!(model = %llm.model(), base_url = %config.llm.base_url, "Assistant backend ready");
    let llm: Arc<dyn LlmClient> = Arc::new(llm);
    let assistant = AssistantClient::new(llm).with_system_prompt_opt(config.llm.system_prompt.clone());

    let rate_limiter = Arc::new(RateLimiter::new(
        config.rate_limit_window,
        config.max_requests_per_window,
    ));
    info!(
        window_secs = config.rate_limit_window.as_secs(),
        max_requests = config.max_requests_per_window,
        cache_capacity = config.price.cache_capacity,
        "Rate limiter and price cache configured"
    );

    let handler_chain = build_handler_chain(MessageRouter::new(prices, assistant), rate_limiter);
    let teloxide_bot = config.telegram.build_bot()?;

    Ok(BotComponents {
        teloxide_bot,
        handler_chain,
    })
}
