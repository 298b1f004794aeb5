//! Typed client handles for the system's actors.
//!
//! Clients are cheap to clone and safe to share across tasks; every clone
//! talks to the same actor.

pub mod actor_client;
mod booking_client;
mod load_client;
mod tracking_client;

pub use actor_client::ActorClient;
pub use booking_client::BookingClient;
pub use load_client::LoadClient;
pub use tracking_client::TrackingClient;
