//! Typed handle to the tracking simulator.

use tokio::sync::{mpsc, oneshot};

use crate::framework::FrameworkError;
use crate::model::{BookingId, TrackingPoint, TrackingSample};
use crate::tracking::TrackingRequest;

/// Client for the tracking simulator actor.
///
/// The simulator is not a registry (its messages carry domain-specific
/// payloads like tick batches), so this client speaks to it directly rather
/// than through [`ResourceClient`](crate::framework::ResourceClient).
#[derive(Clone)]
pub struct TrackingClient {
    sender: mpsc::Sender<TrackingRequest>,
}

impl TrackingClient {
    pub(crate) fn new(sender: mpsc::Sender<TrackingRequest>) -> Self {
        Self { sender }
    }

    /// Seeds the sample for a freshly created booking.
    pub async fn seed(&self, booking_id: BookingId) -> Result<TrackingSample, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TrackingRequest::Seed {
                booking_id,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Fetches the latest sample for one booking, `None` if never seeded.
    pub async fn get_sample(
        &self,
        booking_id: BookingId,
    ) -> Result<Option<TrackingSample>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TrackingRequest::Get {
                booking_id,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Fetches every sample, in seed order.
    pub async fn all_points(&self) -> Result<Vec<TrackingPoint>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TrackingRequest::All { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Advances the samples for the given bookings, returning the updated
    /// points. Ids without a sample are skipped.
    pub async fn tick(&self, active: Vec<BookingId>) -> Result<Vec<TrackingPoint>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(TrackingRequest::Tick { active, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
