//! Error types for the Appointment actor.

use crate::model::{AppointmentId, AppointmentStatus, PartyId};
use crate::party_actor::PartyError;
use crate::validation::ValidationError;
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Appointment validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid patient: {0}")]
    UnknownPatient(PartyId),

    #[error("Invalid doctor: {0}")]
    UnknownDoctor(PartyId),

    /// A party registry refused the booking.
    #[error("Party rejected the booking: {0}")]
    Party(PartyError),

    /// Completed and cancelled appointments cannot change any more.
    #[error("Appointment {id} is {status} and cannot be changed")]
    Closed {
        id: AppointmentId,
        status: AppointmentStatus,
    },

    /// Appointments stay on both parties' records and are never removed.
    #[error("Appointment {0} cannot be deleted")]
    Permanent(AppointmentId),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl AppointmentError {
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => AppointmentError::NotFound(id),
            other => match other.downcast_entity::<AppointmentError>() {
                Ok(inner) => inner,
                Err(other) => AppointmentError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
