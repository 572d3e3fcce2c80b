//! # Generic Actor Server
//!
//! `ResourceActor` owns one registry: the map from identifier to entity for a single entity
//! kind. It processes messages strictly one at a time, which is what makes every operation on a
//! registry entry (including the awaits inside its hooks) a single mutual-exclusion scope.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a registry of entities.
///
/// # Concurrency Model
/// Each `ResourceActor` runs in its own Tokio task and handles its messages sequentially, so the
/// store needs no `Mutex`. A hook that awaits another actor keeps this actor parked on the
/// current message; callers therefore observe check-then-act sequences inside a hook as atomic.
/// Actors that call each other must form an acyclic graph, otherwise two actors can wait on one
/// another forever.
///
/// # Operations
///
/// * **Create**: builds the entity with `T::from_create_params`, rejects an identifier that is
///   already stored with [`FrameworkError::AlreadyExists`], runs `on_create`, then stores it.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **List**: returns clones of every entity in insertion order.
/// * **Count**: returns the number of stored entities.
/// * **Update**: runs `on_update` on the stored entity and returns the new state.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Action**: runs `handle_action` and returns its result.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Course" instead of "roster::model::course::Course"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let mut item = match T::from_create_params(params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };

                    let id = item.id().clone();
                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Duplicate id rejected");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(id.to_string())));
                        continue;
                    }

                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    self.order.push(id.clone());
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .cloned()
                        .collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        self.order.retain(|kept| kept != &id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
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
