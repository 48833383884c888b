//! Transport seam: string-topic publish/subscribe.
//!
//! The reconciler consumes a [`Channel`] rather than a concrete transport.
//! Delivery is at-least-once and may reorder across reconnects; retry and
//! backoff are entirely the implementation's responsibility. The runtime is
//! resilient to redelivery by construction (authoritative updates replace
//! wholesale, submissions are idempotent server-side).

pub mod topics;

mod memory;

pub use memory::MemoryChannel;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::broadcast;

/// A message delivered on a subscribed topic.
#[derive(Clone, Debug)]
pub struct ChannelMessage {
    pub topic: String,
    /// JSON payload; `None` for signal-only topics.
    pub payload: Option<Value>,
}

/// Errors surfaced by channel implementations.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("channel is disconnected")]
    Disconnected,

    #[error("channel lock was poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, ChannelError>;

/// Bidirectional publish/subscribe transport identified by named topics.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Publish a payload on a topic. Implementations own reconnect/retry;
    /// a returned error means the message could not be handed off at all.
    async fn publish(&self, topic: &str, payload: Option<Value>) -> Result<()>;

    /// Subscribe to a topic. The receiver sees messages published after the
    /// subscription was created.
    fn subscribe(&self, topic: &str) -> broadcast::Receiver<ChannelMessage>;

    /// Notifications firing once per successful (re)connection. Consumers
    /// use these to re-request server state after an outage.
    fn connections(&self) -> broadcast::Receiver<()>;
}
