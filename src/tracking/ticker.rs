//! The periodic tick task driving the simulator.
//!
//! Runs independently of request traffic: each tick reads the current
//! in-transit booking ids (one `List` message), advances their samples, and
//! publishes a `tracking_update` per sample. The task is cancellable through a
//! [`CancellationToken`] so shutdown leaves no dangling timer.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::clients::{BookingClient, TrackingClient};
use crate::events::{Event, EventBus};
use crate::framework::FrameworkError;
use crate::model::{BookingId, BookingStatus};

/// Spawns the recurring tick task.
pub fn spawn_ticker(
    period: Duration,
    bookings: BookingClient,
    tracking: TrackingClient,
    bus: EventBus,
    token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; consume it so
        // advances happen one full period after startup.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Ticker cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = run_tick(&bookings, &tracking, &bus).await {
                        // The registries only go away during shutdown.
                        warn!(error = %e, "Tick failed, stopping ticker");
                        break;
                    }
                }
            }
        }
    })
}

async fn run_tick(
    bookings: &BookingClient,
    tracking: &TrackingClient,
    bus: &EventBus,
) -> Result<(), FrameworkError> {
    let active: Vec<BookingId> = bookings
        .list_bookings()
        .await
        .map_err(FrameworkError::from)?
        .into_iter()
        .filter(|booking| booking.status == BookingStatus::InTransit)
        .map(|booking| booking.id)
        .collect();

    if active.is_empty() {
        return Ok(());
    }

    let updated = tracking.tick(active).await?;
    for point in updated {
        bus.publish(Event::tracking_update(point));
    }

    Ok(())
}
