//! Shared read operations for registry clients.

use async_trait::async_trait;

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};

/// Common surface of a registry client.
///
/// Each concrete client wraps a [`ResourceClient`] and maps the generic
/// framework errors into its own domain error; implementing this trait gets
/// the read operations for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: From<FrameworkError> + Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Fetches a single record by id, `None` if it does not exist.
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        self.inner().get(id).await.map_err(Self::Error::from)
    }

    /// Lists every record, newest first.
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        self.inner().list().await.map_err(Self::Error::from)
    }
}
