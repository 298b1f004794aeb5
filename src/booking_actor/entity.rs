//! Entity trait implementation for the Booking domain type.
//!
//! The interesting part is `on_create`: flipping the referenced load to
//! booked, seeding the tracking sample, and publishing the deltas all happen
//! inside the Booking actor's message loop, so the whole sequence is atomic
//! with respect to other booking attempts.

use async_trait::async_trait;
use chrono::Utc;

use super::BookingContext;
use crate::events::Event;
use crate::framework::{ActorEntity, FrameworkError};
use crate::model::{Booking, BookingCreate, BookingId, BookingStatus, TrackingPoint};

#[async_trait]
impl ActorEntity for Booking {
    type Id = BookingId;
    type CreateParams = BookingCreate;
    type Action = ();
    type ActionResult = ();
    type Context = BookingContext;

    fn from_create_params(id: BookingId, params: BookingCreate) -> Result<Self, FrameworkError> {
        Ok(Booking {
            id,
            load_id: params.load_id,
            driver_id: params.driver_id,
            status: BookingStatus::InTransit,
            created_at: Utc::now(),
        })
    }

    /// Books the referenced load, seeds tracking, and announces the booking.
    ///
    /// The load flip goes first: if the load is missing or already booked the
    /// error propagates and this booking is never stored, leaving every
    /// registry unchanged.
    async fn on_create(&mut self, ctx: &BookingContext) -> Result<(), FrameworkError> {
        ctx.loads
            .mark_booked(self.load_id)
            .await
            .map_err(FrameworkError::from)?;

        let sample = ctx.tracking.seed(self.id).await?;

        ctx.bus.publish(Event::booking_created(self.clone()));
        ctx.bus.publish(Event::tracking_update(TrackingPoint {
            booking_id: self.id,
            sample,
        }));

        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, FrameworkError> {
        Ok(())
    }
}
