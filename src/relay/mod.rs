//! Relay pipeline: the poller feeds inbound updates to the router, which
//! dispatches each message to one receiver; receivers act through the
//! outbound transport and report delivery failures on a shared error
//! channel.

pub mod error;
pub mod message;
pub mod poller;
pub mod receiver;
pub mod router;
pub mod telegram;
pub mod transport;

pub use error::RelayError;
pub use message::{ChatMessage, InboundUpdate};
pub use poller::UpdatePoller;
pub use receiver::{EchoReceiver, ForwardReceiver, Receiver};
pub use router::Router;
pub use telegram::TelegramClient;
pub use transport::Transport;
