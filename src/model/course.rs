/// A course students enroll in, with a bounded roster and at most one teacher.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`course_actor`](crate::course_actor) for the enroll/drop and teacher operations.
use super::{CourseId, PartyId};
use crate::association::{ExclusiveSlot, Occupancy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const DEFAULT_MAX_STUDENTS: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub(crate) id: CourseId,
    pub name: String,
    pub description: String,
    pub credits: u32,
    pub(crate) roster: Occupancy<PartyId>,
    pub(crate) teacher: ExclusiveSlot<PartyId>,
}

impl Course {
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    /// Enrolled students in enrollment order.
    pub fn students(&self) -> &[PartyId] {
        self.roster.members()
    }

    pub fn enrollment_count(&self) -> usize {
        self.roster.len()
    }

    pub fn max_students(&self) -> usize {
        self.roster.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.roster.is_full()
    }

    pub fn teacher(&self) -> Option<&PartyId> {
        self.teacher.holder()
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            course_id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            credits: self.credits,
            teacher: self.teacher().cloned(),
            enrolled_students: self.enrollment_count(),
            max_students: self.max_students(),
            is_full: self.is_full(),
        }
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Course(ID: {}, Name: {}, Students: {}/{})",
            self.id,
            self.name,
            self.enrollment_count(),
            self.max_students()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub course_id: CourseId,
    pub name: String,
    pub description: String,
    pub credits: u32,
    pub teacher: Option<PartyId>,
    pub enrolled_students: usize,
    pub max_students: usize,
    pub is_full: bool,
}

/// Payload for creating a course.
#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub credits: u32,
    pub max_students: usize,
}

impl CourseCreate {
    pub fn new(
        id: impl Into<CourseId>,
        name: impl Into<String>,
        description: impl Into<String>,
        credits: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            credits,
            max_students: DEFAULT_MAX_STUDENTS,
        }
    }

    pub fn max_students(mut self, max_students: usize) -> Self {
        self.max_students = max_students;
        self
    }
}

// Capacity is fixed at creation and not part of the update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}
