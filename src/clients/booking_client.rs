//! Typed handle to the booking registry.

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ActorClient;
use crate::booking_actor::BookingError;
use crate::framework::ResourceClient;
use crate::model::{Booking, BookingCreate, BookingId};

/// Client for the booking registry actor.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<Booking>,
}

impl BookingClient {
    pub fn new(inner: ResourceClient<Booking>) -> Self {
        Self { inner }
    }

    /// Books a load for a driver.
    ///
    /// On success the load is `booked`, tracking is seeded, and the
    /// `booking_created` event has been published. On failure nothing
    /// changed: an open load stays open, no booking record exists, and no
    /// event fires.
    #[instrument(skip(self, params))]
    pub async fn create_booking(&self, params: BookingCreate) -> Result<Booking, BookingError> {
        debug!(?params, "create_booking called");
        self.inner.create(params).await.map_err(BookingError::from)
    }

    pub async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>, BookingError> {
        self.get(id).await
    }

    /// Lists every booking, newest first.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        self.list().await
    }
}

#[async_trait]
impl ActorClient<Booking> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &ResourceClient<Booking> {
        &self.inner
    }
}
