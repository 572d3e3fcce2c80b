//! # Appointment Client
use crate::appointment_actor::AppointmentError;
use crate::model::{
    Appointment, AppointmentCreate, AppointmentId, AppointmentStatus, AppointmentUpdate, PartyId,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// Client for interacting with the Appointment actor.
#[derive(Clone)]
pub struct AppointmentClient {
    inner: ResourceClient<Appointment>,
}

impl AppointmentClient {
    pub fn new(inner: ResourceClient<Appointment>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Appointment> for AppointmentClient {
    type Error = AppointmentError;

    fn inner(&self) -> &ResourceClient<Appointment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        AppointmentError::from_framework(e)
    }
}

impl AppointmentClient {
    /// Books an appointment. Unknown parties and reused ids are errors here, since a failed
    /// booking must not be mistaken for an existing one.
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn schedule(&self, params: AppointmentCreate) -> Result<AppointmentId, AppointmentError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(AppointmentError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn update_appointment(
        &self,
        id: AppointmentId,
        update: AppointmentUpdate,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(AppointmentError::from_framework)
    }

    pub async fn set_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppointmentError> {
        self.update_appointment(
            id,
            AppointmentUpdate {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// The doctor's still-scheduled appointments on `date`.
    #[instrument(skip(self))]
    pub async fn agenda(&self, doctor: PartyId, date: NaiveDate) -> Result<Vec<Appointment>, AppointmentError> {
        let all = self.list().await?;
        Ok(all
            .into_iter()
            .filter(|a| {
                a.doctor == doctor
                    && a.scheduled_for.date() == date
                    && a.status == AppointmentStatus::Scheduled
            })
            .collect())
    }
}
