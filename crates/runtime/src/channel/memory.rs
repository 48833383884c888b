//! In-process loopback Channel for tests and offline play.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use super::{Channel, ChannelError, ChannelMessage, Result};

const DEFAULT_CAPACITY: usize = 100;

/// Loopback implementation of [`Channel`].
///
/// Topic fan-out is a broadcast sender per topic, created lazily on first
/// subscription. Publishing to a topic nobody subscribed to drops the
/// message, which is normal, not an error. Connection events are injected
/// explicitly via [`MemoryChannel::announce_connection`]; there is no real
/// socket underneath.
pub struct MemoryChannel {
    topics: Arc<RwLock<HashMap<String, broadcast::Sender<ChannelMessage>>>>,
    connection_tx: broadcast::Sender<()>,
    capacity: usize,
}

impl MemoryChannel {
    /// Creates a channel with default per-topic capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a channel with the given per-topic buffer capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (connection_tx, _) = broadcast::channel(capacity);
        Self {
            topics: Arc::new(RwLock::new(HashMap::new())),
            connection_tx,
            capacity,
        }
    }

    /// Simulate a successful (re)connection, waking every consumer that
    /// watches [`Channel::connections`].
    pub fn announce_connection(&self) {
        if self.connection_tx.send(()).is_err() {
            tracing::trace!("no consumers watching for connections");
        }
    }
}

impl Default for MemoryChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryChannel {
    fn clone(&self) -> Self {
        Self {
            topics: Arc::clone(&self.topics),
            connection_tx: self.connection_tx.clone(),
            capacity: self.capacity,
        }
    }
}

#[async_trait]
impl Channel for MemoryChannel {
    async fn publish(&self, topic: &str, payload: Option<Value>) -> Result<()> {
        let topics = self.topics.read().map_err(|_| ChannelError::LockPoisoned)?;

        match topics.get(topic) {
            Some(tx) => {
                if tx
                    .send(ChannelMessage {
                        topic: topic.to_string(),
                        payload,
                    })
                    .is_err()
                {
                    tracing::trace!(topic, "all subscribers dropped, message discarded");
                }
            }
            None => {
                tracing::trace!(topic, "no subscribers for topic, message discarded");
            }
        }

        Ok(())
    }

    fn subscribe(&self, topic: &str) -> broadcast::Receiver<ChannelMessage> {
        let mut topics = self
            .topics
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        topics
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    fn connections(&self) -> broadcast::Receiver<()> {
        self.connection_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_to_subscribers_of_the_topic() {
        let channel = MemoryChannel::new();
        let mut rx = channel.subscribe("hiscores for 13");

        channel
            .publish("hiscores for 13", Some(serde_json::json!([])))
            .await
            .unwrap();
        channel.publish("hiscores for 14", None).await.unwrap();

        let msg = rx.recv().await.unwrap();
        assert_eq!(msg.topic, "hiscores for 13");
        assert!(msg.payload.is_some());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_not_an_error() {
        let channel = MemoryChannel::new();
        assert!(channel.publish("nowhere", None).await.is_ok());
    }

    #[tokio::test]
    async fn connection_announcements_reach_watchers() {
        let channel = MemoryChannel::new();
        let mut connections = channel.connections();

        channel.announce_connection();
        channel.announce_connection();

        assert!(connections.recv().await.is_ok());
        assert!(connections.recv().await.is_ok());
    }
}
