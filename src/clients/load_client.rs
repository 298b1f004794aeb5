//! Typed handle to the load registry.

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::ActorClient;
use crate::framework::ResourceClient;
use crate::load_actor::{LoadAction, LoadError};
use crate::model::{Load, LoadCreate, LoadId};

/// Client for the load registry actor.
///
/// Cheap to clone; all clones talk to the same actor.
#[derive(Clone)]
pub struct LoadClient {
    inner: ResourceClient<Load>,
}

impl LoadClient {
    pub fn new(inner: ResourceClient<Load>) -> Self {
        Self { inner }
    }

    /// Posts a new load. It comes back `open` with a fresh id.
    #[instrument(skip(self, params))]
    pub async fn create_load(&self, params: LoadCreate) -> Result<Load, LoadError> {
        debug!(?params, "create_load called");
        self.inner.create(params).await.map_err(LoadError::from)
    }

    pub async fn get_load(&self, id: LoadId) -> Result<Option<Load>, LoadError> {
        self.get(id).await
    }

    /// Lists every load, newest first.
    pub async fn list_loads(&self) -> Result<Vec<Load>, LoadError> {
        self.list().await
    }

    /// Transitions a load from `open` to `booked`.
    ///
    /// Fails with [`LoadError::Conflict`] if the load is already booked and
    /// [`LoadError::NotFound`] if it does not exist. The check and the
    /// transition happen inside the actor, so concurrent callers cannot both
    /// succeed.
    #[instrument(skip(self))]
    pub async fn mark_booked(&self, id: LoadId) -> Result<Load, LoadError> {
        self.inner
            .perform_action(id, LoadAction::MarkBooked)
            .await
            .map_err(LoadError::from)
    }
}

#[async_trait]
impl ActorClient<Load> for LoadClient {
    type Error = LoadError;

    fn inner(&self) -> &ResourceClient<Load> {
        &self.inner
    }
}
