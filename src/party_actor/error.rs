//! Error types for the Party actor.

use crate::model::{CourseId, PartyId, RoleKind};
use crate::validation::ValidationError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during party operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PartyError {
    /// The requested party was not found.
    #[error("Party not found: {0}")]
    NotFound(String),

    #[error("Party validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A party of the wrong kind was sent to a registry.
    #[error("{found} cannot be registered with the {expected} registry")]
    WrongRegistry { expected: RoleKind, found: RoleKind },

    /// The operation does not apply to this party's role.
    #[error("{operation} does not apply to {kind} {id}")]
    WrongRole {
        id: PartyId,
        kind: RoleKind,
        operation: String,
    },

    #[error("Student {student} is not enrolled in {course}")]
    NotEnrolled { student: PartyId, course: CourseId },

    /// The patient registry was started without a doctor registry.
    #[error("No doctor registry is wired to this registry")]
    NoCareTeam,

    #[error("Unknown doctor: {0}")]
    UnknownDoctor(PartyId),

    /// The party still holds links and cannot be removed.
    #[error("Party {0} still holds links")]
    StillLinked(PartyId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl PartyError {
    /// Recovers a party error travelling through the framework.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => PartyError::NotFound(id),
            other => match other.downcast_entity::<PartyError>() {
                Ok(inner) => inner,
                Err(other) => PartyError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
