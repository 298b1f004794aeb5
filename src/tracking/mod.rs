//! Simulated telemetry: one position sample per active booking.
//!
//! [`TrackingSimulator`] owns the samples; [`spawn_ticker`] advances them on a
//! fixed, cancellable schedule and publishes the updates.

mod simulator;
mod ticker;

pub use simulator::*;
pub use ticker::*;
