//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.
//!
//! All wire-facing types serialize in camelCase with ISO-8601 timestamps and
//! plain integer ids, matching the payloads the boundary layer exposes.

pub mod booking;
pub mod load;
pub mod tracking;

pub use booking::*;
pub use load::*;
pub use tracking::*;
