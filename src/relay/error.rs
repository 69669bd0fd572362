//! Errors surfaced on the relay's shared error channel.

use std::fmt;

use teloxide::RequestError;

/// A per-message delivery failure.
///
/// Reported on the error channel and dropped; never fatal to the dispatch
/// loop.
#[derive(Debug)]
pub enum RelayError {
    /// Sending a reply into a chat failed.
    SendMessage { chat_id: i64, source: RequestError },
    /// Forwarding a message into the target chat failed.
    ForwardMessage {
        target_chat_id: i64,
        message_id: i64,
        source: RequestError,
    },
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SendMessage { chat_id, source } => {
                write!(f, "cannot send message to chat {}: {}", chat_id, source)
            }
            Self::ForwardMessage {
                target_chat_id,
                message_id,
                source,
            } => {
                write!(
                    f,
                    "cannot forward message {} to chat {}: {}",
                    message_id, target_chat_id, source
                )
            }
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SendMessage { source, .. } => Some(source),
            Self::ForwardMessage { source, .. } => Some(source),
        }
    }
}
