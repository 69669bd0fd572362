//! Telegram transport adapter using teloxide.

use async_trait::async_trait;
use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::{MessageId, ReplyParameters};
use tracing::debug;

use crate::relay::transport::Transport;

/// Telegram API client.
pub struct TelegramClient {
    bot: Bot,
}

impl TelegramClient {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramClient {
    async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
    ) -> Result<i64, RequestError> {
        let mut request = self.bot.send_message(ChatId(chat_id), text);

        if let Some(msg_id) = reply_to_message_id {
            let reply_params = ReplyParameters::new(MessageId(msg_id as i32));
            request = request.reply_parameters(reply_params);
        }

        let sent = request.await?;
        debug!("Sent message {} to chat {}", sent.id.0, chat_id);
        Ok(sent.id.0 as i64)
    }

    async fn forward_message(
        &self,
        to_chat_id: i64,
        from_chat_id: i64,
        message_id: i64,
    ) -> Result<i64, RequestError> {
        let forwarded = self
            .bot
            .forward_message(
                ChatId(to_chat_id),
                ChatId(from_chat_id),
                MessageId(message_id as i32),
            )
            .await?;

        debug!(
            "Forwarded message {} from chat {} to chat {}",
            message_id, from_chat_id, to_chat_id
        );
        Ok(forwarded.id.0 as i64)
    }
}
