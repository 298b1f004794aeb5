//! Broadcast channel for marketplace events.
//!
//! [`EventBus`] is a thin wrapper around [`tokio::sync::broadcast`]: the
//! booking actor and the ticker publish into it, every subscriber holds an
//! independent receiver.
//!
//! Properties:
//! - **Non-blocking publish**: `publish()` never waits on subscribers.
//! - **Fire-and-forget**: if there are no receivers the event is dropped; a
//!   receiver that falls behind observes `RecvError::Lagged` and skips ahead.
//! - **Cheap to clone**: the sender is internally reference counted.

use tokio::sync::broadcast;

use super::Event;

/// Broadcast channel for [`Event`]s.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new bus with the given ring-buffer capacity (minimum 1).
    ///
    /// Capacity bounds how far a slow subscriber may lag before it starts
    /// skipping events; it is shared across all receivers.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event to all active subscribers.
    ///
    /// A publish that races a subscriber disconnect is simply dropped for
    /// that subscriber; it never errors the publisher.
    pub fn publish(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    /// Creates a new receiver observing events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
