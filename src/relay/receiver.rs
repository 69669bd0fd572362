//! The two message receivers the router dispatches to.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::relay::error::RelayError;
use crate::relay::message::ChatMessage;
use crate::relay::transport::Transport;
use crate::search::SearchEngine;

/// A handler for one inbound message.
///
/// Implementations must never fail the dispatch loop; delivery errors go to
/// the shared error channel instead.
#[async_trait]
pub trait Receiver {
    async fn receive(&self, message: &ChatMessage);
}

fn report(errors: &mpsc::UnboundedSender<RelayError>, error: RelayError) {
    if let Err(e) = errors.send(error) {
        warn!("Error channel closed, dropping: {}", e.0);
    }
}

/// Replies to every private message with its own text.
pub struct EchoReceiver<T> {
    transport: Arc<T>,
    errors: mpsc::UnboundedSender<RelayError>,
}

impl<T> EchoReceiver<T> {
    pub fn new(transport: Arc<T>, errors: mpsc::UnboundedSender<RelayError>) -> Self {
        Self { transport, errors }
    }
}

#[async_trait]
impl<T: Transport> Receiver for EchoReceiver<T> {
    async fn receive(&self, message: &ChatMessage) {
        info!("[{}] {}", message.username, message.text);

        if let Err(e) = self
            .transport
            .send_message(message.chat_id, &message.text, Some(message.message_id))
            .await
        {
            report(
                &self.errors,
                RelayError::SendMessage {
                    chat_id: message.chat_id,
                    source: e,
                },
            );
        }
    }
}

/// Forwards messages that match the search engine into the target chat.
pub struct ForwardReceiver<T> {
    transport: Arc<T>,
    errors: mpsc::UnboundedSender<RelayError>,
    target_chat_id: i64,
    engine: SearchEngine,
}

impl<T> ForwardReceiver<T> {
    /// The engine is seeded by the caller before the dispatch loop starts
    /// and is read-only from here on.
    pub fn new(
        transport: Arc<T>,
        errors: mpsc::UnboundedSender<RelayError>,
        target_chat_id: i64,
        engine: SearchEngine,
    ) -> Self {
        Self {
            transport,
            errors,
            target_chat_id,
            engine,
        }
    }
}

#[async_trait]
impl<T: Transport> Receiver for ForwardReceiver<T> {
    async fn receive(&self, message: &ChatMessage) {
        if !self.engine.has_queries(&message.text) {
            debug!(
                "Message {} in chat {} matches no keyword, dropping",
                message.message_id, message.chat_id
            );
            return;
        }

        info!(
            "Forwarding message {} from chat {} to chat {}",
            message.message_id, message.chat_id, self.target_chat_id
        );

        if let Err(e) = self
            .transport
            .forward_message(self.target_chat_id, message.chat_id, message.message_id)
            .await
        {
            report(
                &self.errors,
                RelayError::ForwardMessage {
                    target_chat_id: self.target_chat_id,
                    message_id: message.message_id,
                    source: e,
                },
            );
        }
    }
}
