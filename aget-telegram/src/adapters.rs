//! Adapters from Telegram (teloxide) types to aget_core types.

use aget_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        // `from` is a placeholder bot account when `sender_chat` is set.
        let user = match (&self.0.sender_chat, &self.0.from) {
            (None, Some(from)) => TelegramUserWrapper(from).to_core(),
            _ => self.chat_as_sender(),
        };
        let chat = Chat {
            id: self.0.chat.id.0,
            chat_type: self.chat_type().to_string(),
        };
        Message::text(
            self.0.id.to_string(),
            user,
            chat,
            self.0.text().unwrap_or(""),
        )
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Sender for channel posts and anonymous admins: keyed by the sending chat, else the chat
    /// itself, so each gets its own rate-limit window.
    fn chat_as_sender(&self) -> User {
        let id = self
            .0
            .sender_chat
            .as_ref()
            .map(|c| c.id.0)
            .unwrap_or(self.0.chat.id.0);
        User {
            id,
            username: None,
            first_name: None,
            last_name: None,
        }
    }

    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_group() {
            "group"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}
