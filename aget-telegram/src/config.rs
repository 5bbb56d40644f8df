//! Telegram transport config: token, optional API URL, webhook URL and bind address.
//! Loaded from TELEGRAM_BOT_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL, WEBHOOK_URL, WEBHOOK_BIND_ADDR.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_WEBHOOK_BIND_ADDR: &str = "0.0.0.0:8443";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Bot API base URL override (mock servers in tests, self-hosted Bot API).
    pub telegram_api_url: Option<String>,
    /// Public callback prefix; the token is appended when registering the webhook.
    pub webhook_url: Option<String>,
    pub webhook_bind_addr: SocketAddr,
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN when given.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .context("TELEGRAM_BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|s| !s.trim().is_empty());
        let webhook_bind_addr = env::var("WEBHOOK_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_WEBHOOK_BIND_ADDR.to_string())
            .parse()
            .context("WEBHOOK_BIND_ADDR is not a socket address")?;
        Ok(Self {
            bot_token,
            telegram_api_url,
            webhook_url,
            webhook_bind_addr,
        })
    }

    /// Uses the given token; everything else default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            webhook_url: None,
            webhook_bind_addr: DEFAULT_WEBHOOK_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8443))),
        }
    }

    /// Builds the teloxide Bot, pointing it at `telegram_api_url` when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url).context("TELEGRAM_API_URL is not a valid URL")?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }

    /// Full callback URL registered with Telegram: `<WEBHOOK_URL><token>`.
    pub fn webhook_callback_url(&self) -> Result<reqwest::Url> {
        let base = self
            .webhook_url
            .as_deref()
            .context("WEBHOOK_URL not set (required in webhook mode)")?;
        reqwest::Url::parse(&format!("{}{}", base, self.bot_token))
            .context("WEBHOOK_URL is not a valid URL")
    }
}
