use crate::appointment_actor::AppointmentError;
use crate::config::ConfigError;
use crate::course_actor::CourseError;
use crate::department_actor::DepartmentError;
use crate::model::PartyId;
use crate::party_actor::PartyError;
use crate::room_actor::RoomError;
use thiserror::Error;

/// Errors surfaced by the [`School`](super::School) and [`Hospital`](super::Hospital) facades.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Party(#[from] PartyError),

    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Department(#[from] DepartmentError),

    #[error(transparent)]
    Appointment(#[from] AppointmentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unknown patient: {0}")]
    UnknownPatient(PartyId),

    #[error("Unknown doctor: {0}")]
    UnknownDoctor(PartyId),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
