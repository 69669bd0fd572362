//! Long-poll loop feeding the router's update channel.

use std::sync::Arc;
use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::{ChatKind, Message, Update, UpdateKind};
use tokio::sync::{Notify, mpsc};
use tracing::{info, warn};

use crate::relay::message::{ChatMessage, InboundUpdate};

/// Pause before retrying a failed getUpdates call.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Pulls updates from Telegram and feeds them to the router.
///
/// Runs until the stop handle is notified or the update channel closes.
/// Dropping the channel sender on exit is what lets the router drain and
/// stop.
pub struct UpdatePoller {
    bot: Bot,
    offset: i32,
    timeout_secs: u32,
    stop: Arc<Notify>,
}

impl UpdatePoller {
    pub fn new(bot: Bot, offset: i32, timeout_secs: u32) -> Self {
        Self {
            bot,
            offset,
            timeout_secs,
            stop: Arc::new(Notify::new()),
        }
    }

    /// Handle used to stop the poller from another task.
    pub fn stop_handle(&self) -> Arc<Notify> {
        self.stop.clone()
    }

    pub async fn run(mut self, updates: mpsc::Sender<InboundUpdate>) {
        let stop = self.stop.clone();

        loop {
            let result = tokio::select! {
                biased;

                _ = stop.notified() => {
                    info!("Stop requested, poller exiting");
                    return;
                }
                result = self.poll() => result,
            };

            let batch = match result {
                Ok(batch) => batch,
                Err(e) => {
                    warn!(
                        "getUpdates failed: {e}; retrying in {}s",
                        POLL_RETRY_DELAY.as_secs()
                    );
                    tokio::time::sleep(POLL_RETRY_DELAY).await;
                    continue;
                }
            };

            for update in batch {
                self.offset = self.offset.max(update.id.0 as i32 + 1);
                if updates.send(to_inbound(update)).await.is_err() {
                    warn!("Update channel closed, poller exiting");
                    return;
                }
            }
        }
    }

    async fn poll(&self) -> Result<Vec<Update>, teloxide::RequestError> {
        self.bot
            .get_updates()
            .offset(self.offset)
            .timeout(self.timeout_secs)
            .await
    }
}

fn to_inbound(update: Update) -> InboundUpdate {
    let message = match &update.kind {
        UpdateKind::Message(msg) => Some(to_chat_message(msg)),
        _ => None,
    };
    InboundUpdate {
        update_id: update.id.0,
        message,
    }
}

fn to_chat_message(msg: &Message) -> ChatMessage {
    let username = msg
        .from
        .as_ref()
        .map(|u| u.username.clone().unwrap_or_else(|| u.first_name.clone()))
        .unwrap_or_else(|| "unknown".to_string());

    ChatMessage {
        message_id: msg.id.0 as i64,
        chat_id: msg.chat.id.0,
        username,
        text: msg.text().unwrap_or("").to_string(),
        is_private: matches!(msg.chat.kind, ChatKind::Private(_)),
    }
}
