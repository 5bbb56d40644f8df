//! # aget-telegram
//!
//! Telegram transport layer: teloxide → core adapters, [`aget_core::Bot`] implementation, config,
//! and the two delivery modes (long polling and webhook). Both modes hand each text message to
//! [`dispatch`], which runs the handler chain and sends the reply. No routing or AI logic here.

mod adapters;
mod bot_adapter;
mod config;
mod dispatch;
mod runner;
mod webhook;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{TelegramConfig, DEFAULT_WEBHOOK_BIND_ADDR};
pub use dispatch::dispatch;
pub use runner::run_polling;
pub use webhook::{register_webhook, run_webhook, webhook_path, webhook_router, WEBHOOK_ACK};
