//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via public and pub(crate) APIs.


use aget_core::{Chat, Message, User};

pub(crate) fn sample_message(user_id: i64, content: &str) -> Message {
    Message::text(
        "msg-1",
        User {
            id: user_id,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content,
    )
}
