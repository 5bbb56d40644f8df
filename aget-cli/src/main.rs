//! aget: run the AgET_TG bot in polling or webhook mode. Config from env and optional CLI args.

use aget_cli::components::build_bot_components;
use aget_cli::{BotConfig, Cli, Commands};
use aget_core::init_tracing;
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load(token)?;
            let components = build_bot_components(&config)?;
            info!("Starting AgET_TG (polling)");
            aget_telegram::run_polling(components.teloxide_bot, components.handler_chain).await
        }
        Commands::Webhook { token, url, bind } => {
            let mut config = load(token)?;
            if let Some(url) = url {
                config.telegram.webhook_url = Some(url);
            }
            if let Some(bind) = bind {
                config.telegram.webhook_bind_addr = bind;
            }
            let components = build_bot_components(&config)?;
            info!(bind = %config.telegram.webhook_bind_addr, "Starting AgET_TG (webhook)");
            aget_telegram::run_webhook(
                components.teloxide_bot,
                components.handler_chain,
                &config.telegram,
            )
            .await
        }
    }
}

/// Loads and validates config, then installs tracing so startup errors reach the log file.
fn load(token: Option<String>) -> Result<BotConfig> {
    let config = BotConfig::load(token)?;
    init_tracing(&config.log_file)?;
    config.validate()?;
    Ok(config)
}
