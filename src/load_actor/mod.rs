//! Load-specific resource logic: validation and the booked-status flip.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::LoadClient;
use crate::framework::ResourceActor;
use crate::model::{Load, LoadId};

/// Creates a new Load actor and its client.
pub fn new() -> (ResourceActor<Load>, LoadClient) {
    let load_id_counter = Arc::new(AtomicU64::new(1));
    let next_load_id = move || LoadId(load_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(32, next_load_id);
    let client = LoadClient::new(generic_client);

    (actor, client)
}
