//! Error types for the Course actor.

use crate::model::{CourseId, PartyId};
use crate::party_actor::PartyError;
use crate::validation::ValidationError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during course operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourseError {
    /// The requested course was not found.
    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("Course validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The student or teacher is not registered.
    #[error("Unknown party: {0}")]
    UnknownParty(PartyId),

    /// Students or a teacher are still attached to the course.
    #[error("Course {0} still has students or a teacher")]
    StillLinked(CourseId),

    /// The party registry refused the mirror update.
    #[error("Party rejected the link: {0}")]
    Party(PartyError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CourseError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CourseError::NotFound(id),
            other => match other.downcast_entity::<CourseError>() {
                Ok(inner) => inner,
                Err(other) => CourseError::ActorCommunicationError(other.to_string()),
            },
        }
    }

    /// Error raised when the party registry answered `party`'s mirror update with `e`.
    pub(crate) fn from_party(party: &PartyId, e: PartyError) -> Self {
        match e {
            PartyError::NotFound(_) => CourseError::UnknownParty(party.clone()),
            other => CourseError::Party(other),
        }
    }
}
