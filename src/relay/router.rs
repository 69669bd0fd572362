//! Dispatches inbound updates to the private or group receiver.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::relay::message::InboundUpdate;
use crate::relay::receiver::Receiver;

/// Stateless per-update classifier over the two receivers.
pub struct Router<B, C> {
    bot: B,
    chat: C,
}

impl<B: Receiver, C: Receiver> Router<B, C> {
    /// `bot` handles private chats, `chat` handles everything else.
    pub fn new(bot: B, chat: C) -> Self {
        Self { bot, chat }
    }

    /// Consume updates until the channel closes.
    ///
    /// Updates without a message payload are skipped; every other update is
    /// dispatched synchronously to exactly one receiver. Shutdown happens by
    /// dropping the sending side upstream.
    pub async fn route(self, mut updates: mpsc::Receiver<InboundUpdate>) {
        while let Some(update) = updates.recv().await {
            let Some(message) = update.message else {
                debug!("Update {} has no message payload, skipping", update.update_id);
                continue;
            };

            if message.is_private {
                self.bot.receive(&message).await;
            } else {
                self.chat.receive(&message).await;
            }
        }

        info!("Update stream closed, router stopping");
    }
}
