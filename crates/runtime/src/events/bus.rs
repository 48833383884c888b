//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{LeaderboardEvent, SyncEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Leaderboard changes (authoritative updates applied)
    Leaderboard,
    /// Synchronization of pending entries with the server
    Sync,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Leaderboard(LeaderboardEvent),
    Sync(SyncEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Leaderboard(_) => Topic::Leaderboard,
            Event::Sync(_) => Topic::Sync,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive events
/// they care about. Publishing is best-effort: a topic without subscribers
/// simply drops the event.
#[derive(Clone)]
pub struct EventBus {
    leaderboard_tx: broadcast::Sender<Event>,
    sync_tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            leaderboard_tx: broadcast::channel(capacity).0,
            sync_tx: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Leaderboard => &self.leaderboard_tx,
            Topic::Sync => &self.sync_tx,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
