//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every registry entry (a party, a course, a room, …)
//! implements to be managed by the generic `ResourceActor`. It names the payload types for
//! creation, updates and actions, the runtime context injected into hooks, and the entity's own
//! error type.
//!
//! # Caller-supplied identifiers
//! Identifiers are part of the entity, not minted by the actor. `from_create_params` builds the
//! entity from its payload and [`ActorEntity::id`] exposes the key it will be stored under. The
//! actor refuses a second create under a key it already holds, so the first record always wins.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any registry entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so that an entity can coordinate with other actors while its own actor is
/// busy with the current message. The `Context` associated type carries those dependencies; it
/// is handed to `run()` rather than `new()`, so actors can be created first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key of this entity within its registry.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance, including its identifier.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing entity-specific operations (e.g. `Enroll`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// The framework boxes it inside [`FrameworkError::EntityError`](crate::FrameworkError);
    /// clients recover it with a downcast.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its creation payload.
    /// Called synchronously, before the duplicate check and `on_create`.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and the duplicate check, before the entity is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// Implementations validate the whole update before touching any field so that a rejected
    /// update leaves the entity unchanged.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the registry.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
