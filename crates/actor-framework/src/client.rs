//! # Generic Client
//!
//! The sending half of a registry actor.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be moved into other tasks
/// or injected as another actor's context. The actor stops once every clone is dropped.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn count(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Count { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
