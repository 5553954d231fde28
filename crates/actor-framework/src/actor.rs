//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and processes requests
//! sequentially, so entities never need a `Mutex` or `RwLock`.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of the actor. It owns the `store` and the receiving end
/// of the channel. Each actor runs in its own Tokio task and handles one message at a
/// time, which is what makes a cart's read-modify-write sequences atomic: two requests
/// for the same cart can never interleave.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Product { id: u32, cost: u32 }
/// #[derive(Debug)] struct ProductCreate { cost: u32 }
/// #[derive(Debug)] struct ProductUpdate;
/// #[derive(Debug)] enum ProductAction {}
/// #[derive(Debug, thiserror::Error)] #[error("product error")] struct ProductError;
///
/// #[async_trait]
/// impl ActorEntity for Product {
///     type Id = u32;
///     type Create = ProductCreate;
///     type Update = ProductUpdate;
///     type Action = ProductAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ProductError;
///
///     fn from_create_params(id: u32, params: ProductCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, cost: params.cost })
///     }
///     async fn on_update(&mut self, _: ProductUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, action: ProductAction, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Product>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(ProductCreate { cost: 100 }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().cost, 100);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: keys the entity by [`ActorEntity::natural_key`] or the next sequential
///   ID, rejects taken keys and [`ActorEntity::conflicts_with`] collisions with
///   `AlreadyExists`, runs `on_create`, then stores it.
/// * **Get** / **List**: clones out of the store. `List` is in ID order.
/// * **Update** / **Action**: run the hook against a staged copy of the entity and
///   write it back only when the hook succeeds. A failed hook leaves the stored
///   entity untouched.
/// * **Delete**: runs `on_delete`, then removes the entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is injected into every entity hook. This allows entities to reach
    /// dependencies (other clients) that were created after this actor was constructed.
    pub async fn run(mut self, context: T::Context) {
        // "Cart" instead of "cart_checkout::model::cart::Cart"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut staged = item.clone();
                    match staged.on_update(update, &context).await {
                        Ok(()) => {
                            *item = staged.clone();
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(staged));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut staged = item.clone();
                    let result = match staged.handle_action(action, &context).await {
                        Ok(outcome) => {
                            *item = staged;
                            info!(entity_type, %id, "Action ok");
                            Ok(outcome)
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = match T::natural_key(&params) {
            Some(id) => id,
            None => {
                let id = T::Id::from(self.next_id);
                self.next_id += 1;
                id
            }
        };
        if self.store.contains_key(&id) {
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        let mut item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        if let Some((existing_id, _)) = self
            .store
            .iter()
            .find(|(_, existing)| item.conflicts_with(existing))
        {
            return Err(FrameworkError::AlreadyExists(existing_id.to_string()));
        }

        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.insert(id.clone(), item);
        Ok(id)
    }
}
