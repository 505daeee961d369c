//! Event bus construction, publishing, and subscription.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::Sender;
use tokio_stream::wrappers::BroadcastStream;

use crate::error::EventBusError;
use crate::payloads::{DEFAULT_BUS_CAPACITY, Event, EventEnvelope, EventId};

/// Stream wrapper handed to subscribers.
pub type EventStream = BroadcastStream<EventEnvelope>;

/// Shared event bus built on top of `tokio::broadcast`.
///
/// Cloning the bus yields another handle onto the same channel, so a
/// single bus constructed at startup can be shared by every publisher and
/// subscriber for the life of the process.
#[derive(Clone)]
pub struct EventBus {
    sender: Sender<EventEnvelope>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    /// Construct a bus with the provided channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "event bus capacity must be positive");
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Construct a bus with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUS_CAPACITY)
    }

    /// Publish an event, assigning it a sequential identifier.
    ///
    /// Publishing with no live subscribers succeeds; events simply go
    /// undelivered, matching the fire-and-forget contract of the bus.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel rejects the envelope after the
    /// subscriber check, which can happen when the last subscriber drops
    /// concurrently with the send.
    pub fn publish(&self, event: Event) -> Result<EventId, EventBusError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let envelope = EventEnvelope {
            id,
            timestamp: Utc::now(),
            event,
        };

        if self.sender.receiver_count() == 0 {
            return Ok(id);
        }

        match self.sender.send(envelope) {
            Ok(_) => Ok(id),
            Err(rejected) => Err(EventBusError::SendFailed {
                event_id: id,
                event_kind: rejected.0.event.kind(),
            }),
        }
    }

    /// Subscribe to events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> EventStream {
        BroadcastStream::new(self.sender.subscribe())
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
