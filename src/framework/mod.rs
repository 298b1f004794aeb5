//! Generic actor framework for resource registries.
//!
//! This module provides the core building blocks for type-safe actor systems
//! that manage resource entities with create/get/list operations and custom
//! actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that manages entities
//! - [`ResourceClient`] - Type-safe client handle for a running actor
//! - [`FrameworkError`] - Common error taxonomy
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
pub use self::mock::MockClient;
