//! Entity trait implementation for [`Course`].
//!
//! The course owns the capacity gate of every enrollment. `Enroll` runs gate, student mirror
//! update and roster update while the course actor is busy with that single message, so two
//! concurrent enrollments can never both take the last seat.

use super::actions::{CourseAction, CourseActionResult};
use super::{CourseContext, CourseError};
use crate::association::{ExclusiveSlot, LinkOutcome, Occupancy, UnlinkOutcome};
use crate::model::{Course, CourseCreate, CourseId, CourseUpdate, Link, PartyId};
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Course {
    type Id = CourseId;
    type Create = CourseCreate;
    type Update = CourseUpdate;
    type Action = CourseAction;
    type ActionResult = CourseActionResult;
    type Context = CourseContext;
    type Error = CourseError;

    fn from_create_params(params: CourseCreate) -> Result<Self, CourseError> {
        validation::non_empty("course name", &params.name)?;
        Ok(Course {
            id: params.id,
            name: params.name,
            description: params.description,
            credits: params.credits,
            roster: Occupancy::new(params.max_students)?,
            teacher: ExclusiveSlot::new(),
        })
    }

    fn id(&self) -> &CourseId {
        &self.id
    }

    async fn on_update(&mut self, update: CourseUpdate, _ctx: &CourseContext) -> Result<(), CourseError> {
        if let Some(name) = &update.name {
            validation::non_empty("course name", name)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &CourseContext) -> Result<(), CourseError> {
        if !self.roster.is_empty() || self.teacher.is_held() {
            return Err(CourseError::StillLinked(self.id.clone()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CourseAction,
        ctx: &CourseContext,
    ) -> Result<CourseActionResult, CourseError> {
        match action {
            CourseAction::Enroll(student) => self
                .enroll(student, ctx)
                .await
                .map(CourseActionResult::Enroll),
            CourseAction::Drop(student) => {
                self.drop_student(student, ctx).await.map(CourseActionResult::Drop)
            }
            CourseAction::AssignTeacher(teacher) => self
                .assign_teacher(teacher, ctx)
                .await
                .map(CourseActionResult::AssignTeacher),
            CourseAction::ReleaseTeacher => self
                .release_teacher(ctx)
                .await
                .map(CourseActionResult::ReleaseTeacher),
        }
    }
}

impl Course {
    async fn enroll(
        &mut self,
        student: PartyId,
        ctx: &CourseContext,
    ) -> Result<LinkOutcome, CourseError> {
        if let Some(rejection) = self.roster.gate(&student) {
            debug!(course_id = %self.id, party_id = %student, ?rejection, "Enrollment rejected");
            return Ok(rejection);
        }

        ctx.students
            .attach(student.clone(), Link::Course(self.id.clone()))
            .await
            .map_err(|e| CourseError::from_party(&student, e))?;

        let outcome = self.roster.admit(student.clone());
        info!(
            course_id = %self.id,
            party_id = %student,
            occupants = self.roster.len(),
            capacity = self.roster.capacity(),
            "Linked"
        );
        Ok(outcome)
    }

    async fn drop_student(
        &mut self,
        student: PartyId,
        ctx: &CourseContext,
    ) -> Result<UnlinkOutcome, CourseError> {
        if !self.roster.contains(&student) {
            debug!(course_id = %self.id, party_id = %student, "Not enrolled, nothing to drop");
            return Ok(UnlinkOutcome::NotLinked);
        }

        ctx.students
            .detach(student.clone(), Link::Course(self.id.clone()))
            .await
            .map_err(|e| CourseError::from_party(&student, e))?;

        let outcome = self.roster.release(&student);
        info!(
            course_id = %self.id,
            party_id = %student,
            occupants = self.roster.len(),
            "Unlinked"
        );
        Ok(outcome)
    }

    async fn assign_teacher(
        &mut self,
        teacher: PartyId,
        ctx: &CourseContext,
    ) -> Result<LinkOutcome, CourseError> {
        if let Some(current) = self.teacher.holder() {
            debug!(course_id = %self.id, %current, "Teacher already assigned");
            return Ok(LinkOutcome::AlreadyLinked);
        }

        ctx.teachers
            .attach(teacher.clone(), Link::Teaching(self.id.clone()))
            .await
            .map_err(|e| CourseError::from_party(&teacher, e))?;

        info!(course_id = %self.id, party_id = %teacher, "Teacher assigned");
        Ok(self.teacher.assign(teacher))
    }

    async fn release_teacher(&mut self, ctx: &CourseContext) -> Result<UnlinkOutcome, CourseError> {
        let Some(current) = self.teacher.holder().cloned() else {
            debug!(course_id = %self.id, "No teacher to release");
            return Ok(UnlinkOutcome::NotLinked);
        };

        ctx.teachers
            .detach(current.clone(), Link::Teaching(self.id.clone()))
            .await
            .map_err(|e| CourseError::from_party(&current, e))?;

        info!(course_id = %self.id, party_id = %current, "Teacher released");
        Ok(self.teacher.release_matching(&current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn capacity_defaults_to_thirty_and_must_be_positive() {
        let algebra =
            Course::from_create_params(CourseCreate::new("C001", "Algebra I", "Intro", 3)).unwrap();
        assert_eq!(algebra.max_students(), 30);
        assert!(!algebra.is_full());

        let empty = CourseCreate::new("C002", "Physics", "", 4).max_students(0);
        assert_eq!(
            Course::from_create_params(empty).unwrap_err(),
            CourseError::Validation(ValidationError::ZeroCapacity)
        );
    }

    #[test]
    fn course_display_shows_enrollment() {
        let calculus = Course::from_create_params(
            CourseCreate::new("C003", "Calculus", "Advanced Mathematics", 4).max_students(15),
        )
        .unwrap();
        assert_eq!(
            calculus.to_string(),
            "Course(ID: C003, Name: Calculus, Students: 0/15)"
        );
    }
}
