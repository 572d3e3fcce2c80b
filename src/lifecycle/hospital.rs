use super::{join_all, SystemError};
use crate::appointment_actor::AppointmentContext;
use crate::association::UnlinkOutcome;
use crate::clients::{AppointmentClient, DepartmentClient, PartyClient, RoomClient};
use crate::config::RosterConfig;
use crate::model::{PartyId, Report, RoleKind};
use crate::party_actor::PartyContext;
use crate::room_actor::RoomContext;
use actor_framework::ActorClient;
use tokio::task::JoinHandle;
use tracing::{info, instrument};

/// The clinical registries, started and wired together.
///
/// Dependency edges: rooms -> patients -> doctors, appointments -> patients and doctors.
pub struct Hospital {
    pub name: String,
    pub patients: PartyClient,
    pub doctors: PartyClient,
    pub rooms: RoomClient,
    pub appointments: AppointmentClient,
    pub departments: DepartmentClient,
    handles: Vec<JoinHandle<()>>,
}

impl Hospital {
    /// Spawns the five registries. Must be called inside a Tokio runtime.
    pub fn new(name: impl Into<String>, config: &RosterConfig) -> Self {
        let mailbox = config.mailbox_capacity;

        let (doctor_actor, doctors) = crate::party_actor::new(mailbox);
        let (patient_actor, patients) = crate::party_actor::new(mailbox);
        let (room_actor, rooms) = crate::room_actor::new(mailbox);
        let (appointment_actor, appointments) = crate::appointment_actor::new(mailbox);
        let (department_actor, departments) = crate::department_actor::new(mailbox);

        let handles = vec![
            tokio::spawn(doctor_actor.run(PartyContext::standalone(RoleKind::Doctor))),
            tokio::spawn(patient_actor.run(PartyContext::with_care_team(doctors.clone()))),
            tokio::spawn(room_actor.run(RoomContext::new(patients.clone()))),
            tokio::spawn(
                appointment_actor.run(AppointmentContext::new(patients.clone(), doctors.clone())),
            ),
            tokio::spawn(department_actor.run(())),
        ];

        let hospital = Self {
            name: name.into(),
            patients,
            doctors,
            rooms,
            appointments,
            departments,
            handles,
        };
        info!(hospital = %hospital.name, "Hospital started");
        hospital
    }

    pub async fn report(&self) -> Result<Report, SystemError> {
        Ok(Report::new(format!("Hospital Report: {}", self.name))
            .count("Patients", self.patients.count().await?)
            .count("Doctors", self.doctors.count().await?)
            .count("Rooms", self.rooms.count().await?)
            .count("Appointments", self.appointments.count().await?)
            .count("Departments", self.departments.count().await?))
    }

    /// Releases the patient's room, whichever it is.
    #[instrument(skip(self))]
    pub async fn discharge(&self, patient: PartyId) -> Result<UnlinkOutcome, SystemError> {
        let record = self
            .patients
            .get(patient.clone())
            .await?
            .ok_or_else(|| SystemError::UnknownPatient(patient.clone()))?;

        let room = match record.as_patient().and_then(|p| p.room()) {
            Some(room) => room.clone(),
            None => return Ok(UnlinkOutcome::NotLinked),
        };
        Ok(self.rooms.discharge(room, patient).await?)
    }

    /// Appends `Diagnosis: <text>` to the patient's history. The doctor must exist.
    #[instrument(skip(self, text))]
    pub async fn write_diagnosis(
        &self,
        doctor: PartyId,
        patient: PartyId,
        text: &str,
    ) -> Result<(), SystemError> {
        if self.doctors.get(doctor.clone()).await?.is_none() {
            return Err(SystemError::UnknownDoctor(doctor));
        }
        self.patients
            .record_history(patient, format!("Diagnosis: {text}"))
            .await?;
        Ok(())
    }

    /// Closes every registry and waits for the actor tasks to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!(hospital = %self.name, "Shutting down hospital...");
        drop(self.appointments);
        drop(self.rooms);
        drop(self.departments);
        drop(self.patients);
        drop(self.doctors);

        join_all(self.handles).await?;
        info!("Hospital shutdown complete.");
        Ok(())
    }
}
