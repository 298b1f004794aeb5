//! System startup and shutdown.
//!
//! [`FreightSystem`] wires the actors together in dependency order and owns
//! their task handles, so a test or binary can stand up the whole marketplace
//! with one call and tear it down cleanly with another.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::booking_actor::{self, BookingContext};
use crate::clients::{BookingClient, LoadClient, TrackingClient};
use crate::events::{Broadcaster, EventBus};
use crate::load_actor;
use crate::tracking::{self, spawn_ticker};

/// Tunables for a running system.
#[derive(Clone, Debug)]
pub struct SystemConfig {
    /// How often the simulator advances in-transit samples.
    pub tick_interval: Duration,
    /// Ring-buffer capacity of the event bus.
    pub event_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(3000),
            event_capacity: 64,
        }
    }
}

/// A fully wired marketplace: registries, simulator, ticker, and broadcaster.
pub struct FreightSystem {
    pub load_client: LoadClient,
    pub booking_client: BookingClient,
    pub tracking_client: TrackingClient,
    pub broadcaster: Broadcaster,
    handles: Vec<JoinHandle<()>>,
    ticker: JoinHandle<()>,
    cancel: CancellationToken,
}

impl FreightSystem {
    /// Starts a system with default configuration.
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Starts all actors and the tick task.
    ///
    /// The Booking actor receives its context last so it can hold clients for
    /// the load registry and the simulator; neither of those knows about
    /// bookings.
    pub fn with_config(config: SystemConfig) -> Self {
        info!(?config, "Starting freight system");

        let bus = EventBus::new(config.event_capacity);

        let (load_actor, load_client) = load_actor::new();
        let (simulator, tracking_client) = tracking::new();
        let (booking_actor, booking_client) = booking_actor::new();

        let booking_context = BookingContext {
            loads: load_client.clone(),
            tracking: tracking_client.clone(),
            bus: bus.clone(),
        };

        let handles = vec![
            tokio::spawn(load_actor.run(())),
            tokio::spawn(simulator.run()),
            tokio::spawn(booking_actor.run(booking_context)),
        ];

        let broadcaster = Broadcaster::new(
            bus.clone(),
            load_client.clone(),
            booking_client.clone(),
            tracking_client.clone(),
        );

        let cancel = CancellationToken::new();
        let ticker = spawn_ticker(
            config.tick_interval,
            booking_client.clone(),
            tracking_client.clone(),
            bus,
            cancel.child_token(),
        );

        Self {
            load_client,
            booking_client,
            tracking_client,
            broadcaster,
            handles,
            ticker,
            cancel,
        }
    }

    /// Stops the ticker, then the actors, and waits for all of them to exit.
    ///
    /// Clients held outside the system keep their actors alive; callers
    /// should drop them before expecting shutdown to complete.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down freight system");

        self.cancel.cancel();
        self.ticker
            .await
            .map_err(|e| format!("Ticker task failed: {e}"))?;

        // Dropping the clients closes the request channels. The Booking actor
        // holds load and tracking clients in its context, so it must exit
        // before those two actors see their channels close; awaiting the
        // handles in spawn order covers that.
        drop(self.broadcaster);
        drop(self.booking_client);
        drop(self.load_client);
        drop(self.tracking_client);

        for handle in self.handles {
            handle
                .await
                .map_err(|e| format!("Actor task failed: {e}"))?;
        }

        info!("Freight system shutdown complete");
        Ok(())
    }
}

impl Default for FreightSystem {
    fn default() -> Self {
        Self::new()
    }
}
