//! Error types for the Load actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during load operations.
///
/// All variants are recoverable by the caller; a failed command leaves the
/// registry unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    /// A creation field was missing or invalid.
    #[error("Load validation error: {0}")]
    Validation(String),

    /// The requested load was not found.
    #[error("Load not found: {0}")]
    NotFound(String),

    /// Attempt to book a load that is no longer open.
    #[error("Load conflict: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<FrameworkError> for LoadError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::InvalidInput(msg) => LoadError::Validation(msg),
            FrameworkError::NotFound(msg) => LoadError::NotFound(msg),
            FrameworkError::Conflict(msg) => LoadError::Conflict(msg),
            other => LoadError::ActorCommunication(other.to_string()),
        }
    }
}

impl From<LoadError> for FrameworkError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::Validation(msg) => FrameworkError::InvalidInput(msg),
            LoadError::NotFound(msg) => FrameworkError::NotFound(msg),
            LoadError::Conflict(msg) => FrameworkError::Conflict(msg),
            LoadError::ActorCommunication(_) => FrameworkError::ActorClosed,
        }
    }
}
