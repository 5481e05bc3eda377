//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use super::types::{SessionEvent, TickerEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Phase transitions, metric updates, crises, and run completion
    Session,
    /// Cosmetic news-ticker headlines
    Ticker,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Session(SessionEvent),
    Ticker(TickerEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Session(_) => Topic::Session,
            Event::Ticker(_) => Topic::Ticker,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about.
pub struct EventBus {
    channels: Arc<RwLock<HashMap<Topic, broadcast::Sender<Event>>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();

        // Pre-create channels for each topic
        channels.insert(Topic::Session, broadcast::channel(capacity).0);
        channels.insert(Topic::Ticker, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(RwLock::new(channels)),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        // Use try_read to avoid blocking in async context; events are
        // best-effort.
        match self.channels.try_read() {
            Ok(channels) => {
                if let Some(tx) = channels.get(&topic)
                    && tx.send(event).is_err()
                {
                    // No subscribers for this topic - this is normal, not an error
                    tracing::trace!("No subscribers for topic {:?}", topic);
                }
            }
            Err(_) => {
                tracing::debug!("Failed to acquire event bus lock for topic {:?}", topic);
            }
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        let channels = self
            .channels
            .try_read()
            .expect("Failed to acquire read lock on event channels");
        channels
            .get(&topic)
            .expect("Topic channel not initialized")
            .subscribe()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
