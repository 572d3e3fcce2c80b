//! Entity trait implementation for [`Appointment`].
//!
//! Booking touches two registries. The patient side is written first; if the doctor side then
//! fails, the patient side is undone before the error is returned, so a rejected booking leaves
//! no trace on either party.

use super::{AppointmentContext, AppointmentError};
use crate::model::{
    Appointment, AppointmentCreate, AppointmentId, AppointmentStatus, AppointmentUpdate, Link,
};
use crate::party_actor::PartyError;
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Appointment {
    type Id = AppointmentId;
    type Create = AppointmentCreate;
    type Update = AppointmentUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = AppointmentContext;
    type Error = AppointmentError;

    fn from_create_params(params: AppointmentCreate) -> Result<Self, AppointmentError> {
        validation::non_empty("reason", &params.reason)?;
        Ok(Appointment {
            id: params.id,
            patient: params.patient,
            doctor: params.doctor,
            scheduled_for: params.scheduled_for,
            reason: params.reason,
            status: AppointmentStatus::Scheduled,
        })
    }

    fn id(&self) -> &AppointmentId {
        &self.id
    }

    async fn on_create(&mut self, ctx: &AppointmentContext) -> Result<(), AppointmentError> {
        let link = Link::Appointment(self.id.clone());

        ctx.patients
            .attach(self.patient.clone(), link.clone())
            .await
            .map_err(|e| match e {
                PartyError::NotFound(_) => AppointmentError::UnknownPatient(self.patient.clone()),
                other => AppointmentError::Party(other),
            })?;

        if let Err(e) = ctx.doctors.attach(self.doctor.clone(), link.clone()).await {
            if let Err(undo) = ctx.patients.detach(self.patient.clone(), link).await {
                warn!(appointment_id = %self.id, error = %undo, "Could not undo patient booking");
            }
            return Err(match e {
                PartyError::NotFound(_) => AppointmentError::UnknownDoctor(self.doctor.clone()),
                other => AppointmentError::Party(other),
            });
        }

        info!(
            appointment_id = %self.id,
            patient_id = %self.patient,
            doctor_id = %self.doctor,
            "Appointment booked"
        );
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: AppointmentUpdate,
        _ctx: &AppointmentContext,
    ) -> Result<(), AppointmentError> {
        if self.status.is_terminal() {
            return Err(AppointmentError::Closed {
                id: self.id.clone(),
                status: self.status,
            });
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(scheduled_for) = update.scheduled_for {
            self.scheduled_for = scheduled_for;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &AppointmentContext) -> Result<(), AppointmentError> {
        Err(AppointmentError::Permanent(self.id.clone()))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &AppointmentContext) -> Result<(), AppointmentError> {
        Ok(())
    }
}
