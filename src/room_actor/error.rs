//! Error types for the Room actor.

use crate::model::{PartyId, RoomId};
use crate::party_actor::PartyError;
use crate::validation::ValidationError;
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(String),

    #[error("Room validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown patient: {0}")]
    UnknownPatient(PartyId),

    #[error("Room {0} is occupied")]
    StillLinked(RoomId),

    #[error("Patient rejected the link: {0}")]
    Party(PartyError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl RoomError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => RoomError::NotFound(id),
            other => match other.downcast_entity::<RoomError>() {
                Ok(inner) => inner,
                Err(other) => RoomError::ActorCommunicationError(other.to_string()),
            },
        }
    }

    pub(crate) fn from_party(patient: &PartyId, e: PartyError) -> Self {
        match e {
            PartyError::NotFound(_) => RoomError::UnknownPatient(patient.clone()),
            other => RoomError::Party(other),
        }
    }
}
