//! # Party Client
//!
//! Provides a high-level API for interacting with a `Party` registry.
//! It wraps a `ResourceClient<Party>` and exposes domain-specific methods.
use crate::association::{LinkOutcome, Registration, UnlinkOutcome};
use crate::model::{CourseId, Link, Party, PartyCreate, PartyId, PartyUpdate, VitalSigns};
use crate::party_actor::{Mirror, PartyAction, PartyActionResult, PartyError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with a Party registry.
#[derive(Clone)]
pub struct PartyClient {
    inner: ResourceClient<Party>,
}

impl PartyClient {
    pub fn new(inner: ResourceClient<Party>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Party> for PartyClient {
    type Error = PartyError;

    fn inner(&self) -> &ResourceClient<Party> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PartyError::from_framework(e)
    }
}

impl PartyClient {
    /// Registers a party. A known identifier is reported as [`Registration::Duplicate`].
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn register(&self, params: PartyCreate) -> Result<Registration, PartyError> {
        debug!("Sending request");
        match self.inner.create(params).await {
            Ok(_) => Ok(Registration::Registered),
            Err(FrameworkError::AlreadyExists(_)) => Ok(Registration::Duplicate),
            Err(e) => Err(PartyError::from_framework(e)),
        }
    }

    /// Applies contact and role field changes atomically.
    #[instrument(skip(self))]
    pub async fn update_profile(&self, id: PartyId, update: PartyUpdate) -> Result<Party, PartyError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(PartyError::from_framework)
    }

    async fn act(&self, id: PartyId, action: PartyAction) -> Result<PartyActionResult, PartyError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(PartyError::from_framework)
    }

    /// Records the party side of `link`. Only registries owning the other side call this.
    #[instrument(skip(self))]
    pub(crate) async fn attach(&self, id: PartyId, link: Link) -> Result<LinkOutcome, PartyError> {
        match self.act(id, PartyAction::Attach(Mirror::new(link))).await? {
            PartyActionResult::Attach(outcome) => Ok(outcome),
            _ => unreachable!("Attach action must return Attach result"),
        }
    }

    #[instrument(skip(self))]
    pub(crate) async fn detach(&self, id: PartyId, link: Link) -> Result<UnlinkOutcome, PartyError> {
        match self.act(id, PartyAction::Detach(Mirror::new(link))).await? {
            PartyActionResult::Detach(outcome) => Ok(outcome),
            _ => unreachable!("Detach action must return Detach result"),
        }
    }

    /// Assigns `doctor` to `patient`. Only valid on a patient registry wired to the doctors.
    #[instrument(skip(self))]
    pub async fn assign_doctor(
        &self,
        patient: PartyId,
        doctor: PartyId,
    ) -> Result<LinkOutcome, PartyError> {
        match self.act(patient, PartyAction::AssignDoctor(doctor)).await? {
            PartyActionResult::AssignDoctor(outcome) => Ok(outcome),
            _ => unreachable!("AssignDoctor action must return AssignDoctor result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_doctor(&self, patient: PartyId) -> Result<UnlinkOutcome, PartyError> {
        match self.act(patient, PartyAction::ReleaseDoctor).await? {
            PartyActionResult::ReleaseDoctor(outcome) => Ok(outcome),
            _ => unreachable!("ReleaseDoctor action must return ReleaseDoctor result"),
        }
    }

    /// Sets the grade of an enrolled course, replacing any earlier grade.
    #[instrument(skip(self))]
    pub async fn post_grade(
        &self,
        student: PartyId,
        course: CourseId,
        grade: f64,
    ) -> Result<(), PartyError> {
        match self
            .act(student, PartyAction::PostGrade { course, grade })
            .await?
        {
            PartyActionResult::PostGrade(()) => Ok(()),
            _ => unreachable!("PostGrade action must return PostGrade result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn record_history(&self, id: PartyId, text: String) -> Result<(), PartyError> {
        match self.act(id, PartyAction::RecordHistory(text)).await? {
            PartyActionResult::RecordHistory(()) => Ok(()),
            _ => unreachable!("RecordHistory action must return RecordHistory result"),
        }
    }

    /// Returns `false` when the patient already had the allergy.
    #[instrument(skip(self))]
    pub async fn add_allergy(&self, patient: PartyId, allergy: String) -> Result<bool, PartyError> {
        match self.act(patient, PartyAction::AddAllergy(allergy)).await? {
            PartyActionResult::AddAllergy(added) => Ok(added),
            _ => unreachable!("AddAllergy action must return AddAllergy result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn record_vitals(&self, patient: PartyId, signs: VitalSigns) -> Result<(), PartyError> {
        match self.act(patient, PartyAction::RecordVitals(signs)).await? {
            PartyActionResult::RecordVitals(()) => Ok(()),
            _ => unreachable!("RecordVitals action must return RecordVitals result"),
        }
    }
}
