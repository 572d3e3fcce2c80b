//! # Room Actor
//!
//! Manages hospital rooms and owns the patient ↔ room association. A room admits a patient
//! only when it has a free bed *and* the patient is not already admitted somewhere else; both
//! checks and both updates happen while the room actor handles one `Admit` message.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Room`]
//! - [`error`] - [`RoomError`]
//! - [`actions`] - [`RoomAction`] and [`RoomActionResult`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{PartyClient, RoomClient};
use crate::model::Room;
use actor_framework::ResourceActor;

#[derive(Clone)]
pub struct RoomContext {
    pub patients: PartyClient,
}

impl RoomContext {
    pub fn new(patients: PartyClient) -> Self {
        Self { patients }
    }
}

/// Creates a new Room actor and its client.
pub fn new(mailbox: usize) -> (ResourceActor<Room>, RoomClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox);
    (actor, RoomClient::new(generic_client))
}
