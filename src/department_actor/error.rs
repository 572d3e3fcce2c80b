//! Error types for the Department actor.

use crate::model::PartyId;
use crate::validation::ValidationError;
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DepartmentError {
    #[error("Department not found: {0}")]
    NotFound(String),

    #[error("Department validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Only members can head a department.
    #[error("{0} is not a member of the department")]
    NotAMember(PartyId),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DepartmentError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => DepartmentError::NotFound(id),
            other => match other.downcast_entity::<DepartmentError>() {
                Ok(inner) => inner,
                Err(other) => DepartmentError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
