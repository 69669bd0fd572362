//! Outbound transport port. The Telegram adapter implements it; tests
//! substitute mocks.

use async_trait::async_trait;
use teloxide::RequestError;

/// The outbound actions receivers can issue.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `text` to `chat_id`, optionally as a reply to another message.
    /// Returns the sent message id.
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
    ) -> Result<i64, RequestError>;

    /// Forward an existing message, identified by its origin chat and
    /// message id, into `to_chat_id`. Returns the new message id.
    async fn forward_message(
        &self,
        to_chat_id: i64,
        from_chat_id: i64,
        message_id: i64,
    ) -> Result<i64, RequestError>;
}
