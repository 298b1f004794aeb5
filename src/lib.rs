//! A real-time freight marketplace core built on message-passing actors.
//!
//! Customers post loads, drivers book them, and a simulator streams position
//! updates for every in-transit booking. All shared state lives inside actors
//! that own it exclusively and process requests one at a time, so the racy
//! operations (booking the same load twice, snapshotting state while events
//! fly) need no locks.
//!
//! # Architecture
//!
//! - [`framework`]: the generic resource actor. One event loop per entity
//!   type, request/response over channels, entity hooks for validation and
//!   orchestration.
//! - [`model`]: the wire-level data types. Loads, bookings, tracking samples,
//!   and their id newtypes.
//! - [`load_actor`] / [`booking_actor`]: the two registries. Load validation
//!   and the open-to-booked flip live with loads; cross-actor orchestration
//!   (flip the load, seed tracking, publish events) lives in the booking
//!   entity's `on_create` hook.
//! - [`tracking`]: the simulator actor plus the cancellable tick task that
//!   drives it.
//! - [`events`]: the broadcast bus, the wire event envelope, and the
//!   [`events::Broadcaster`] that hands each new subscriber a bootstrap
//!   snapshot before live events.
//! - [`clients`]: cloneable typed handles, one per actor.
//! - [`lifecycle`]: [`lifecycle::FreightSystem`] wires it all together and
//!   tears it down in order.
//!
//! # Example
//!
//! ```no_run
//! use loadboard::lifecycle::FreightSystem;
//! use loadboard::model::{BookingCreate, CustomerId, DriverId, LoadCreate};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let system = FreightSystem::new();
//!
//! let load = system
//!     .load_client
//!     .create_load(LoadCreate {
//!         origin: "Delhi".into(),
//!         destination: "Jaipur".into(),
//!         weight: 12.5,
//!         material: "steel".into(),
//!         price: 18000.0,
//!         customer_id: CustomerId(2),
//!     })
//!     .await?;
//!
//! let booking = system
//!     .booking_client
//!     .create_booking(BookingCreate {
//!         load_id: load.id,
//!         driver_id: DriverId(1),
//!     })
//!     .await?;
//!
//! let mut events = system.broadcaster.subscribe().await?;
//! let bootstrap = events.next().await;
//! # let _ = (booking, bootstrap);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod booking_actor;
pub mod clients;
pub mod events;
pub mod framework;
pub mod lifecycle;
pub mod load_actor;
pub mod model;
pub mod tracking;
