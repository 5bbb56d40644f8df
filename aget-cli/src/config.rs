//! Application config loaded from the environment (after `.env`).

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use aget_telegram::TelegramConfig;
use llm_client::{LlmConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use price_client::{PriceConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_COINGECKO_API_URL};

pub const DEFAULT_LOG_FILE: &str = "logs/aget-tg.log";
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
pub const DEFAULT_MAX_REQUESTS_PER_WINDOW: usize = 10;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub llm: LlmConfig,
    pub price: PriceConfig,
    pub rate_limit_window: Duration,
    pub max_requests_per_window: usize,
    pub log_file: String,
}

/// Parses `key` when set; unset → `default`, set but invalid → error naming the key.
fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}

impl BotConfig {
    /// Loads config from environment variables. `token` overrides TELEGRAM_BOT_TOKEN when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;

        let timeout = Duration::from_secs(env_parse("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?);

        let api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
        let llm = LlmConfig {
            api_key,
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            system_prompt: env::var("GEMINI_SYSTEM_PROMPT")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            timeout,
        };

        let price = PriceConfig::default()
            .with_api_url(
                env::var("COINGECKO_API_URL")
                    .unwrap_or_else(|_| DEFAULT_COINGECKO_API_URL.to_string()),
            )
            .with_cache_capacity(env_parse("PRICE_CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY)?)
            .with_timeout(timeout);

        let rate_limit_window = Duration::from_secs(env_parse(
            "RATE_LIMIT_WINDOW",
            DEFAULT_RATE_LIMIT_WINDOW_SECS,
        )?);
        let max_requests_per_window =
            env_parse("MAX_REQUESTS_PER_WINDOW", DEFAULT_MAX_REQUESTS_PER_WINDOW)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            llm,
            price,
            rate_limit_window,
            max_requests_per_window,
            log_file,
        })
    }

    /// Rejects settings that would make the bot useless.
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            anyhow::bail!("GEMINI_API_KEY is empty");
        }
        if self.rate_limit_window.is_zero() {
            anyhow::bail!("RATE_LIMIT_WINDOW must be at least 1 second");
        }
        if self.max_requests_per_window == 0 {
            anyhow::bail!("MAX_REQUESTS_PER_WINDOW must be at least 1");
        }
        if self.price.cache_capacity == 0 {
            anyhow::bail!("PRICE_CACHE_CAPACITY must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "TELEGRAM_BOT_TOKEN",
        "BOT_TOKEN",
        "GEMINI_API_KEY",
        "GEMINI_BASE_URL",
        "GEMINI_MODEL",
        "GEMINI_SYSTEM_PROMPT",
        "COINGECKO_API_URL",
        "PRICE_CACHE_CAPACITY",
        "HTTP_TIMEOUT_SECS",
        "RATE_LIMIT_WINDOW",
        "MAX_REQUESTS_PER_WINDOW",
        "WEBHOOK_URL",
        "WEBHOOK_BIND_ADDR",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
        env::set_var("GEMINI_API_KEY", "test_key");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram.bot_token, "test_token");
        assert!(config.telegram.webhook_url.is_none());
        assert_eq!(config.llm.api_key, "test_key");
        assert_eq!(config.llm.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.llm.model, "gemini-1.5-flash");
        assert!(config.llm.system_prompt.is_none());
        assert_eq!(config.llm.timeout, Duration::from_secs(10));
        assert_eq!(config.price.api_url, DEFAULT_COINGECKO_API_URL);
        assert_eq!(config.price.cache_capacity, 100);
        assert_eq!(config.rate_limit_window, Duration::from_secs(60));
        assert_eq!(config.max_requests_per_window, 10);
        assert_eq!(config.log_file, "logs/aget-tg.log");
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "custom_token");
        env::set_var("GEMINI_API_KEY", "custom_key");
        env::set_var("GEMINI_MODEL", "gemini-2.0-flash");
        env::set_var("GEMINI_SYSTEM_PROMPT", "Be brief.");
        env::set_var("COINGECKO_API_URL", "http://localhost:9999/simple/price");
        env::set_var("PRICE_CACHE_CAPACITY", "5");
        env::set_var("HTTP_TIMEOUT_SECS", "3");
        env::set_var("RATE_LIMIT_WINDOW", "30");
        env::set_var("MAX_REQUESTS_PER_WINDOW", "2");
        env::set_var("WEBHOOK_URL", "https://bot.example.com/");
        env::set_var("LOG_FILE", "/tmp/aget.log");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.system_prompt.as_deref(), Some("Be brief."));
        assert_eq!(config.llm.timeout, Duration::from_secs(3));
        assert_eq!(config.price.api_url, "http://localhost:9999/simple/price");
        assert_eq!(config.price.cache_capacity, 5);
        assert_eq!(config.price.timeout, Duration::from_secs(3));
        assert_eq!(config.rate_limit_window, Duration::from_secs(30));
        assert_eq!(config.max_requests_per_window, 2);
        assert_eq!(
            config.telegram.webhook_url.as_deref(),
            Some("https://bot.example.com/")
        );
        assert_eq!(config.log_file, "/tmp/aget.log");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "env_token");
        env::set_var("GEMINI_API_KEY", "test_key");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.telegram.bot_token, "override_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_missing_gemini_key() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

        let err = BotConfig::load(None).err().unwrap();

        assert!(err.to_string().contains("GEMINI_API_KEY"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_invalid_number() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
        env::set_var("GEMINI_API_KEY", "test_key");
        env::set_var("MAX_REQUESTS_PER_WINDOW", "ten");

        let err = BotConfig::load(None).err().unwrap();

        assert!(err.to_string().contains("MAX_REQUESTS_PER_WINDOW"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_zero_limits() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
        env::set_var("GEMINI_API_KEY", "test_key");
        env::set_var("MAX_REQUESTS_PER_WINDOW", "0");

        let config = BotConfig::load(None).unwrap();

        assert!(config.validate().is_err());
        clear_env();
    }
}
