//! Subscriber bootstrap and the per-subscriber event stream.
//!
//! A new subscriber must see current truth before any live event, so
//! [`Broadcaster::subscribe`] queries the registries for a fresh snapshot at
//! subscribe time and front-loads it into the returned [`Subscription`]. The
//! broadcast receiver is registered *before* the snapshot is taken, so no
//! event published in between is lost (one may be observed twice, which
//! subscribers tolerate).

use thiserror::Error;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

use super::{Event, EventBus};
use crate::clients::{BookingClient, LoadClient, TrackingClient};

/// Errors raised while admitting a subscriber.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubscribeError {
    /// A registry could not be queried for the bootstrap snapshot. Only
    /// happens once shutdown has begun.
    #[error("Registry unavailable: {0}")]
    RegistryUnavailable(String),
}

/// Hands out event subscriptions with bootstrap catch-up semantics.
#[derive(Clone)]
pub struct Broadcaster {
    bus: EventBus,
    loads: LoadClient,
    bookings: BookingClient,
    tracking: TrackingClient,
}

impl Broadcaster {
    pub fn new(
        bus: EventBus,
        loads: LoadClient,
        bookings: BookingClient,
        tracking: TrackingClient,
    ) -> Self {
        Self {
            bus,
            loads,
            bookings,
            tracking,
        }
    }

    /// Admits a new subscriber.
    ///
    /// The returned [`Subscription`] yields a single `bootstrap` event first,
    /// computed from live registry state at this moment, then every event
    /// published afterwards.
    pub async fn subscribe(&self) -> Result<Subscription, SubscribeError> {
        // Register before snapshotting so nothing published in between is lost.
        let rx = self.bus.subscribe();

        let loads = self
            .loads
            .list_loads()
            .await
            .map_err(|e| SubscribeError::RegistryUnavailable(e.to_string()))?;
        let bookings = self
            .bookings
            .list_bookings()
            .await
            .map_err(|e| SubscribeError::RegistryUnavailable(e.to_string()))?;
        let tracking = self
            .tracking
            .all_points()
            .await
            .map_err(|e| SubscribeError::RegistryUnavailable(e.to_string()))?;

        debug!(
            loads = loads.len(),
            bookings = bookings.len(),
            samples = tracking.len(),
            "Subscriber bootstrap"
        );

        Ok(Subscription {
            pending: Some(Event::bootstrap(loads, bookings, tracking)),
            rx,
        })
    }
}

/// One subscriber's view of the event stream.
///
/// Dropping a subscription disconnects the subscriber; in-flight publishes
/// for it are discarded without affecting anyone else.
pub struct Subscription {
    pending: Option<Event>,
    rx: broadcast::Receiver<Event>,
}

impl Subscription {
    /// Returns the next event, or `None` once the system has shut down.
    ///
    /// The first call always yields the bootstrap snapshot. A subscriber that
    /// lagged past the bus capacity skips the missed events and resumes with
    /// the most recent ones.
    pub async fn next(&mut self) -> Option<Event> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Subscriber lagged, skipping ahead");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
