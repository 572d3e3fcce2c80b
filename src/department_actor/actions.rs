//! Custom actions for the Department actor.
//!
//! Every action reports whether it changed the department; repeating one is harmless.

use crate::model::{CourseId, PartyId};

#[derive(Debug, Clone)]
pub enum DepartmentAction {
    AddMember(PartyId),
    /// Removing the head also clears the head.
    RemoveMember(PartyId),
    AddCourse(CourseId),
    RemoveCourse(CourseId),
    AppointHead(PartyId),
}

/// Results from DepartmentActions - variants match 1:1 with DepartmentAction
#[derive(Debug, Clone, PartialEq)]
pub enum DepartmentActionResult {
    AddMember(bool),
    RemoveMember(bool),
    AddCourse(bool),
    RemoveCourse(bool),
    AppointHead(bool),
}
