//! # Core Actor Framework
//!
//! Generic building blocks for the registry actors.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that manages entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (invalid input, not found, conflict, channel lifecycle).
//!
//! ## Concurrency Model
//!
//! Each `ResourceActor` runs in its own Tokio task and processes messages
//! sequentially, so no locks are needed for its internal state. Cross-actor
//! sequences (for example "check a load is open, then flip it to booked")
//! execute inside a single message via the async entity hooks, which is what
//! makes them atomic with respect to concurrent requests.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// Associated types enforce type safety: a `Load` actor only accepts `LoadCreate`
/// payloads and `LoadAction`s, and the compiler rejects everything else.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so an entity can call other actors while it is
/// being created or acted upon. The `Context` type carries those dependencies;
/// it is injected into `run()` rather than the constructor ("late binding"),
/// which avoids circular wiring between actors.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `MarkBooked`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the full entity from the assigned id and creation payload.
    /// This is where field validation lives; it runs synchronously before
    /// `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, FrameworkError>;

    /// Called after the entity is constructed but before it is stored.
    /// Use this hook for cross-actor side effects; an error here means the
    /// entity is never inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), FrameworkError> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, FrameworkError>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors surfaced by the actor framework.
///
/// The first three variants carry the domain taxonomy (validation, missing
/// reference, state conflict) so entity hooks can report failures without
/// losing their kind on the way back to the caller. The channel variants
/// only occur during shutdown.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Each actor manages one kind of resource; the request set is the lifecycle
/// this system needs: `Create` (returns the stored record), `Get`, `List`
/// (most-recently-created first), and entity-specific `Action`s. Nothing in
/// this system is generically updated or deleted, so those requests do not
/// exist.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// Owns the store and the receiver end of the channel. Entities are kept in a
/// map for lookup plus a recency list so `List` returns newest first, which is
/// the visible ordering every registry in this system promises.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    recency: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            recency: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook, so entities
    /// can reach dependencies (other clients, the event bus) that were wired
    /// up after this actor was instantiated.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "Load" instead of "loadboard::model::load::Load")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(e));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            self.recency.insert(0, id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .recency
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item.handle_action(action, &context).await;
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Shipment {
        id: u64,
        label: String,
        sealed: bool,
    }

    #[derive(Debug)]
    struct ShipmentCreate {
        label: String,
    }

    #[derive(Debug)]
    enum ShipmentAction {
        Seal,
    }

    #[async_trait]
    impl ActorEntity for Shipment {
        type Id = u64;
        type CreateParams = ShipmentCreate;
        type Action = ShipmentAction;
        type ActionResult = bool;
        type Context = ();

        fn from_create_params(id: u64, params: ShipmentCreate) -> Result<Self, FrameworkError> {
            if params.label.is_empty() {
                return Err(FrameworkError::InvalidInput("label is required".into()));
            }
            Ok(Self {
                id,
                label: params.label,
                sealed: false,
            })
        }

        async fn handle_action(
            &mut self,
            action: ShipmentAction,
            _ctx: &Self::Context,
        ) -> Result<bool, FrameworkError> {
            match action {
                ShipmentAction::Seal => {
                    if self.sealed {
                        Err(FrameworkError::Conflict(format!(
                            "shipment {} is already sealed",
                            self.id
                        )))
                    } else {
                        self.sealed = true;
                        Ok(true)
                    }
                }
            }
        }
    }

    fn start_actor() -> ResourceClient<Shipment> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_resource_actor_with_actions() {
        let client = start_actor();

        // 1. Create
        let created = client
            .create(ShipmentCreate {
                label: "crate-a".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert!(!created.sealed);

        // 2. Perform Action: Seal
        let changed = client
            .perform_action(created.id, ShipmentAction::Seal)
            .await
            .unwrap();
        assert!(changed);

        // Verify state
        let shipment = client.get(created.id).await.unwrap().unwrap();
        assert!(shipment.sealed);

        // 3. Sealing again conflicts
        let err = client
            .perform_action(created.id, ShipmentAction::Seal)
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_validation_and_missing_action_target() {
        let client = start_actor();

        let err = client
            .create(ShipmentCreate { label: "".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::InvalidInput(_)));

        let err = client
            .perform_action(99, ShipmentAction::Seal)
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let client = start_actor();

        for label in ["first", "second", "third"] {
            client
                .create(ShipmentCreate {
                    label: label.into(),
                })
                .await
                .unwrap();
        }

        let listed = client.list().await.unwrap();
        let labels: Vec<&str> = listed.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["third", "second", "first"]);

        // Ids are strictly increasing even though listing is newest first.
        let ids: Vec<u64> = listed.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
