//! Long-polling runner: teloxide REPL; each text message is converted and dispatched in its own task.

use aget_core::{Bot as CoreBot, ToCoreMessage};
use anyhow::Result;
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, info, instrument};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use super::dispatch::dispatch;

/// Starts long polling with the given teloxide Bot and handler chain. Returns on Ctrl-C.
#[instrument(skip(bot, handler_chain))]
pub async fn run_polling(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity confirmed");
    }

    let reply_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = handler_chain;

    info!("AgET_TG started in polling mode. Press Ctrl+C to stop.");
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let reply_bot = reply_bot.clone();

        async move {
            if msg.text().is_none() {
                debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                return respond(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                dispatch(&chain, reply_bot.as_ref(), &core_msg).await;
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
