use super::{AppointmentId, PartyId, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Completed and cancelled appointments accept no further changes.
    pub fn is_terminal(self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// A booked visit between one patient and one doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub(crate) id: AppointmentId,
    pub patient: PartyId,
    pub doctor: PartyId,
    pub scheduled_for: NaiveDateTime,
    pub reason: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn id(&self) -> &AppointmentId {
        &self.id
    }

    pub fn summary(&self) -> AppointmentSummary {
        AppointmentSummary {
            appointment_id: self.id.clone(),
            patient: self.patient.clone(),
            doctor: self.doctor.clone(),
            scheduled_for: self.scheduled_for.format(TIMESTAMP_FORMAT).to_string(),
            reason: self.reason.clone(),
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentSummary {
    pub appointment_id: AppointmentId,
    pub patient: PartyId,
    pub doctor: PartyId,
    pub scheduled_for: String,
    pub reason: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone)]
pub struct AppointmentCreate {
    pub id: AppointmentId,
    pub patient: PartyId,
    pub doctor: PartyId,
    pub scheduled_for: NaiveDateTime,
    pub reason: String,
}

/// Status change and/or reschedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    pub status: Option<AppointmentStatus>,
    pub scheduled_for: Option<NaiveDateTime>,
}
