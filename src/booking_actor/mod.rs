//! Booking-specific resource logic and cross-actor orchestration.

pub mod entity;
pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::{BookingClient, LoadClient, TrackingClient};
use crate::events::EventBus;
use crate::framework::ResourceActor;
use crate::model::{Booking, BookingId};

/// Dependencies injected into the Booking actor's hooks.
///
/// `on_create` uses these to flip the load, seed the tracking sample, and
/// publish the resulting events without leaving the actor's message loop.
#[derive(Clone)]
pub struct BookingContext {
    pub loads: LoadClient,
    pub tracking: TrackingClient,
    pub bus: EventBus,
}

/// Creates a new Booking actor and its client.
pub fn new() -> (ResourceActor<Booking>, BookingClient) {
    let booking_id_counter = Arc::new(AtomicU64::new(1));
    let next_booking_id = move || BookingId(booking_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(32, next_booking_id);
    let client = BookingClient::new(generic_client);

    (actor, client)
}
