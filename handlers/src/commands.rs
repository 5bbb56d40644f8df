//! `/start` and `/help`. Unknown commands end the chain without a reply.

use aget_core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

pub const WELCOME_TEXT: &str = "Hi, I'm AgET_TG, a web3 telegram bot! 🚀\n\n\
Commands:\n\
- Ask about crypto prices: 'price of bitcoin'\n\
- Ask blockchain/crypto questions\n\
- Explore Web3 concepts";

pub const HELP_TEXT: &str = "AgET_TG Help 📖\n\n\
Price Queries:\n\
- 'price of bitcoin'\n\
- 'price of ethereum, solana'\n\n\
Educational Queries:\n\
- 'Explain blockchain'\n\
- 'How do smart contracts work?'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    /// Any other `/command`; carries the command name without the slash.
    Unknown(String),
}

impl BotCommand {
    /// Parses the leading `/command` (optionally `/command@botname`) of `text`.
    /// Returns None for text that is not a command.
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.trim_start().split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);
        Some(match name.to_lowercase().as_str() {
            "start" => BotCommand::Start,
            "help" => BotCommand::Help,
            other => BotCommand::Unknown(other.to_string()),
        })
    }
}

/// Answers `/start` and `/help` with static text; lets plain text through.
pub struct CommandHandler;

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let response = match BotCommand::parse(&message.content) {
            None => HandlerResponse::Continue,
            Some(BotCommand::Start) => HandlerResponse::Reply(WELCOME_TEXT.to_string()),
            Some(BotCommand::Help) => HandlerResponse::Reply(HELP_TEXT.to_string()),
            Some(BotCommand::Unknown(name)) => {
                debug!(user_id = message.user.id, command = %name, "Ignoring unknown command");
                HandlerResponse::Stop
            }
        };
        Ok(response)
    }
}
