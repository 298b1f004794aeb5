//! Event broadcast: wire events, the bus, and subscriber bootstrap.

mod broadcaster;
mod bus;
mod event;

pub use broadcaster::{Broadcaster, SubscribeError, Subscription};
pub use bus::EventBus;
pub use event::{Event, Snapshot};
