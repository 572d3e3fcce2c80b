//! # Course Client
//!
//! Provides a high-level API for interacting with the `Course` actor.
use crate::association::{LinkOutcome, Registration, UnlinkOutcome};
use crate::course_actor::{CourseAction, CourseActionResult, CourseError};
use crate::model::{Course, CourseCreate, CourseId, CourseUpdate, PartyId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Course actor.
#[derive(Clone)]
pub struct CourseClient {
    inner: ResourceClient<Course>,
}

impl CourseClient {
    pub fn new(inner: ResourceClient<Course>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Course> for CourseClient {
    type Error = CourseError;

    fn inner(&self) -> &ResourceClient<Course> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CourseError::from_framework(e)
    }
}

impl CourseClient {
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn register(&self, params: CourseCreate) -> Result<Registration, CourseError> {
        debug!("Sending request");
        match self.inner.create(params).await {
            Ok(_) => Ok(Registration::Registered),
            Err(FrameworkError::AlreadyExists(_)) => Ok(Registration::Duplicate),
            Err(e) => Err(CourseError::from_framework(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_course(&self, id: CourseId, update: CourseUpdate) -> Result<Course, CourseError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(CourseError::from_framework)
    }

    async fn act(&self, id: CourseId, action: CourseAction) -> Result<CourseActionResult, CourseError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(CourseError::from_framework)
    }

    /// Enrolls `student`. A full course or an existing enrollment is reported, not an error.
    #[instrument(skip(self))]
    pub async fn enroll(&self, course: CourseId, student: PartyId) -> Result<LinkOutcome, CourseError> {
        match self.act(course, CourseAction::Enroll(student)).await? {
            CourseActionResult::Enroll(outcome) => Ok(outcome),
            _ => unreachable!("Enroll action must return Enroll result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn drop_student(
        &self,
        course: CourseId,
        student: PartyId,
    ) -> Result<UnlinkOutcome, CourseError> {
        match self.act(course, CourseAction::Drop(student)).await? {
            CourseActionResult::Drop(outcome) => Ok(outcome),
            _ => unreachable!("Drop action must return Drop result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn assign_teacher(
        &self,
        course: CourseId,
        teacher: PartyId,
    ) -> Result<LinkOutcome, CourseError> {
        match self.act(course, CourseAction::AssignTeacher(teacher)).await? {
            CourseActionResult::AssignTeacher(outcome) => Ok(outcome),
            _ => unreachable!("AssignTeacher action must return AssignTeacher result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_teacher(&self, course: CourseId) -> Result<UnlinkOutcome, CourseError> {
        match self.act(course, CourseAction::ReleaseTeacher).await? {
            CourseActionResult::ReleaseTeacher(outcome) => Ok(outcome),
            _ => unreachable!("ReleaseTeacher action must return ReleaseTeacher result"),
        }
    }
}
