//! Domain message types, decoupled from the Telegram wire format.

/// A single chat message as seen by the relay.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Message ID, unique within the chat it arrived in.
    pub message_id: i64,
    /// Chat the message arrived in (negative = group, positive = DM).
    pub chat_id: i64,
    pub username: String,
    pub text: String,
    /// True for a one-on-one conversation with the bot.
    pub is_private: bool,
}

/// One inbound event from the platform.
///
/// `message` is `None` for service/status updates, which the relay skips.
#[derive(Debug, Clone)]
pub struct InboundUpdate {
    pub update_id: u32,
    pub message: Option<ChatMessage>,
}
