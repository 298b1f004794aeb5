//! Demo binary: stands up the marketplace, runs one post-and-book flow, and
//! prints the event stream a subscriber would receive.

use std::time::Duration;

use tracing::info;

use loadboard::lifecycle::{tracing::setup_tracing, FreightSystem, SystemConfig};
use loadboard::model::{BookingCreate, CustomerId, DriverId, LoadCreate};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = FreightSystem::with_config(SystemConfig {
        tick_interval: Duration::from_millis(1000),
        ..SystemConfig::default()
    });

    // Subscribe before acting so the printed stream shows the empty bootstrap
    // followed by every live event.
    let mut subscription = system
        .broadcaster
        .subscribe()
        .await
        .map_err(|e| e.to_string())?;
    let printer = tokio::spawn(async move {
        while let Some(event) = subscription.next().await {
            match serde_json::to_string(&event) {
                Ok(json) => info!(%json, "event"),
                Err(e) => info!(error = %e, "unserializable event"),
            }
        }
    });

    let load = system
        .load_client
        .create_load(LoadCreate {
            origin: "Delhi".into(),
            destination: "Jaipur".into(),
            weight: 12.5,
            material: "steel".into(),
            price: 18000.0,
            customer_id: CustomerId(2),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(load_id = %load.id, "Posted load");

    let booking = system
        .booking_client
        .create_booking(BookingCreate {
            load_id: load.id,
            driver_id: DriverId(1),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(booking_id = %booking.id, "Booked load");

    // Let a few simulator ticks stream through before shutting down.
    tokio::time::sleep(Duration::from_millis(3500)).await;

    system.shutdown().await?;
    printer
        .await
        .map_err(|e| format!("Printer task failed: {e}"))?;

    Ok(())
}
