//! Wiring, startup, and shutdown for the whole system.

pub mod system;
pub mod tracing;

pub use system::{FreightSystem, SystemConfig};
