//! # Department Client
use crate::association::Registration;
use crate::department_actor::{DepartmentAction, DepartmentActionResult, DepartmentError};
use crate::model::{CourseId, Department, DepartmentCreate, DepartmentId, PartyId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Department actor.
#[derive(Clone)]
pub struct DepartmentClient {
    inner: ResourceClient<Department>,
}

impl DepartmentClient {
    pub fn new(inner: ResourceClient<Department>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Department> for DepartmentClient {
    type Error = DepartmentError;

    fn inner(&self) -> &ResourceClient<Department> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DepartmentError::from_framework(e)
    }
}

impl DepartmentClient {
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn register(&self, params: DepartmentCreate) -> Result<Registration, DepartmentError> {
        debug!("Sending request");
        match self.inner.create(params).await {
            Ok(_) => Ok(Registration::Registered),
            Err(FrameworkError::AlreadyExists(_)) => Ok(Registration::Duplicate),
            Err(e) => Err(DepartmentError::from_framework(e)),
        }
    }

    async fn act(
        &self,
        id: DepartmentId,
        action: DepartmentAction,
    ) -> Result<DepartmentActionResult, DepartmentError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(DepartmentError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn add_member(&self, dept: DepartmentId, member: PartyId) -> Result<bool, DepartmentError> {
        match self.act(dept, DepartmentAction::AddMember(member)).await? {
            DepartmentActionResult::AddMember(changed) => Ok(changed),
            _ => unreachable!("AddMember action must return AddMember result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        dept: DepartmentId,
        member: PartyId,
    ) -> Result<bool, DepartmentError> {
        match self.act(dept, DepartmentAction::RemoveMember(member)).await? {
            DepartmentActionResult::RemoveMember(changed) => Ok(changed),
            _ => unreachable!("RemoveMember action must return RemoveMember result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_course(&self, dept: DepartmentId, course: CourseId) -> Result<bool, DepartmentError> {
        match self.act(dept, DepartmentAction::AddCourse(course)).await? {
            DepartmentActionResult::AddCourse(changed) => Ok(changed),
            _ => unreachable!("AddCourse action must return AddCourse result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_course(
        &self,
        dept: DepartmentId,
        course: CourseId,
    ) -> Result<bool, DepartmentError> {
        match self.act(dept, DepartmentAction::RemoveCourse(course)).await? {
            DepartmentActionResult::RemoveCourse(changed) => Ok(changed),
            _ => unreachable!("RemoveCourse action must return RemoveCourse result"),
        }
    }

    /// Makes `head` the department head; `head` must already be a member.
    #[instrument(skip(self))]
    pub async fn appoint_head(&self, dept: DepartmentId, head: PartyId) -> Result<bool, DepartmentError> {
        match self.act(dept, DepartmentAction::AppointHead(head)).await? {
            DepartmentActionResult::AppointHead(changed) => Ok(changed),
            _ => unreachable!("AppointHead action must return AppointHead result"),
        }
    }
}
