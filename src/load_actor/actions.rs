//! Custom actions for the Load actor.
//!
//! Actions are the check-and-mutate operations that must run inside the Load
//! actor's message loop to stay atomic with respect to concurrent requests.

/// Custom actions for Load entities.
#[derive(Debug, Clone)]
pub enum LoadAction {
    /// Flips an open load to booked.
    ///
    /// # Errors
    /// Fails with a conflict if the load is no longer open. The check and the
    /// flip happen in one action handler invocation, so of any number of
    /// concurrent booking attempts on one load, exactly one can succeed.
    MarkBooked,
}
