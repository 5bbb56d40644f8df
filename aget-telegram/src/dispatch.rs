//! Shared per-message step for both transports: run the chain, send the reply.

use aget_core::{Bot, HandlerResponse, Message};
use handler_chain::HandlerChain;
use tracing::{debug, error, info, instrument};

/// Runs `chain` for `message` and sends a `Reply` back through `bot`.
///
/// Chain and send failures are logged; nothing here is fatal to the process.
#[instrument(skip(chain, bot, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
pub async fn dispatch(chain: &HandlerChain, bot: &dyn Bot, message: &Message) {
    match chain.handle(message).await {
        Ok(HandlerResponse::Reply(text)) => match bot.reply_to(message, &text).await {
            Ok(()) => info!(reply_len = text.len(), "step: reply sent"),
            Err(e) => error!(error = %e, "Failed to send reply"),
        },
        Ok(response) => debug!(response = ?response, "Chain finished without reply"),
        Err(e) => error!(error = %e, "Handler chain failed"),
    }
}
