//! Custom actions for the Course actor.

use crate::association::{LinkOutcome, UnlinkOutcome};
use crate::model::PartyId;

/// Association operations owned by the course side.
#[derive(Debug, Clone)]
pub enum CourseAction {
    /// Enrolls a student, subject to the course capacity.
    Enroll(PartyId),
    /// Drops a student and its grade for this course.
    Drop(PartyId),
    /// Sets the course's teacher unless one is already assigned.
    AssignTeacher(PartyId),
    ReleaseTeacher,
}

/// Results from CourseActions - variants match 1:1 with CourseAction
#[derive(Debug, Clone, PartialEq)]
pub enum CourseActionResult {
    Enroll(LinkOutcome),
    Drop(UnlinkOutcome),
    AssignTeacher(LinkOutcome),
    ReleaseTeacher(UnlinkOutcome),
}
