//! CLI parser.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "aget")]
#[command(about = "AgET_TG: Telegram crypto price and assistant bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot with long polling (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Register a webhook and serve updates over HTTP.
    Webhook {
        #[arg(short, long)]
        token: Option<String>,
        /// Public URL prefix; the bot token is appended. Overrides WEBHOOK_URL.
        #[arg(short, long)]
        url: Option<String>,
        /// Listen address. Overrides WEBHOOK_BIND_ADDR.
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
}
