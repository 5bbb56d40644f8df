//! Webhook transport: axum endpoint at `/<token>` receiving Telegram `Update` payloads.
//!
//! Every POST is answered with [`WEBHOOK_ACK`]. Message updates with text are dispatched before
//! answering; other update kinds are ignored and malformed bodies are logged and dropped.

use std::net::SocketAddr;
use std::sync::Arc;

use aget_core::{Bot as CoreBot, ToCoreMessage};
use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::types::{Update, UpdateKind};
use tracing::{debug, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use super::config::TelegramConfig;
use super::dispatch::dispatch;

/// Fixed acknowledgement body returned for every webhook POST.
pub const WEBHOOK_ACK: &str = "OK";

#[derive(Clone)]
struct WebhookState {
    chain: HandlerChain,
    bot: Arc<dyn CoreBot>,
}

/// Route path for the webhook: `/<token>`.
pub fn webhook_path(token: &str) -> String {
    format!("/{}", token)
}

/// Builds the axum router serving the webhook endpoint.
pub fn webhook_router(token: &str, chain: HandlerChain, bot: Arc<dyn CoreBot>) -> Router {
    Router::new()
        .route(&webhook_path(token), post(receive_update))
        .with_state(WebhookState { chain, bot })
}

async fn receive_update(State(state): State<WebhookState>, body: Bytes) -> &'static str {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, body_len = body.len(), "Malformed webhook payload dropped");
            return WEBHOOK_ACK;
        }
    };

    match update.kind {
        UpdateKind::Message(msg) if msg.text().is_some() => {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            dispatch(&state.chain, state.bot.as_ref(), &core_msg).await;
        }
        _ => debug!(update_id = update.id.0, "Ignoring non-text update"),
    }
    WEBHOOK_ACK
}

/// Calls `setWebhook(<WEBHOOK_URL><token>)` once and returns the registered URL.
#[instrument(skip(bot, config))]
pub async fn register_webhook(bot: &teloxide::Bot, config: &TelegramConfig) -> Result<reqwest::Url> {
    let callback = config.webhook_callback_url()?;
    bot.set_webhook(callback.clone())
        .await
        .context("Failed to register webhook with Telegram")?;
    info!(host = ?callback.host_str(), "Webhook registered");
    Ok(callback)
}

/// Registers the webhook with Telegram, then serves it until Ctrl-C.
#[instrument(skip(bot, handler_chain, config))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    config: &TelegramConfig,
) -> Result<()> {
    register_webhook(&bot, config).await?;

    let reply_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot));
    let app = webhook_router(&config.bot_token, handler_chain, reply_bot);
    serve(app, config.webhook_bind_addr).await
}

async fn serve(app: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind webhook listener on {}", addr))?;
    info!(addr = %addr, "AgET_TG started in webhook mode");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("Webhook server failed")
}
