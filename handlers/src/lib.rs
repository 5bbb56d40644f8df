//! # Handlers for the AgET_TG bot
//!
//! Handler implementations run by the handler chain: logging, per-user rate limiting,
//! `/start` and `/help`, and the price / assistant message router.

mod commands;
mod logging;
mod rate_limit;
mod router;

#[cfg(test)]
mod test;

pub use commands::{BotCommand, CommandHandler, HELP_TEXT, WELCOME_TEXT};
pub use logging::LoggingHandler;
pub use rate_limit::{RateLimitHandler, RateLimiter, RATE_LIMITED_TEXT};
pub use router::{classify, MessageRouter, Route, RouteError, RouterHandler, PRICE_TRIGGER};
