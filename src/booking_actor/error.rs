//! Error types for the Booking actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during booking operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    /// A creation field was missing or invalid.
    #[error("Booking validation error: {0}")]
    Validation(String),

    /// The referenced load does not exist.
    #[error("Load not found: {0}")]
    NotFound(String),

    /// The referenced load is already booked.
    #[error("Booking conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for BookingError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::InvalidInput(msg) => BookingError::Validation(msg),
            FrameworkError::NotFound(msg) => BookingError::NotFound(msg),
            FrameworkError::Conflict(msg) => BookingError::Conflict(msg),
            other => BookingError::ActorCommunication(other.to_string()),
        }
    }
}

impl From<BookingError> for FrameworkError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::Validation(msg) => FrameworkError::InvalidInput(msg),
            BookingError::NotFound(msg) => FrameworkError::NotFound(msg),
            BookingError::Conflict(msg) => FrameworkError::Conflict(msg),
            BookingError::ActorCommunication(_) => FrameworkError::ActorClosed,
        }
    }
}
