use super::{CourseId, DepartmentId, PartyId};
use serde::{Deserialize, Serialize};

/// A department grouping staff and courses.
///
/// Membership is one-sided: a teacher does not record its department. The head, when set, is
/// always one of the members.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub(crate) id: DepartmentId,
    pub name: String,
    pub(crate) head: Option<PartyId>,
    pub(crate) members: Vec<PartyId>,
    pub(crate) courses: Vec<CourseId>,
}

impl Department {
    pub fn id(&self) -> &DepartmentId {
        &self.id
    }

    pub fn head(&self) -> Option<&PartyId> {
        self.head.as_ref()
    }

    pub fn members(&self) -> &[PartyId] {
        &self.members
    }

    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn summary(&self) -> DepartmentSummary {
        DepartmentSummary {
            dept_id: self.id.clone(),
            name: self.name.clone(),
            head: self.head.clone(),
            total_courses: self.courses.len(),
            total_members: self.members.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    pub dept_id: DepartmentId,
    pub name: String,
    pub head: Option<PartyId>,
    pub total_courses: usize,
    pub total_members: usize,
}

#[derive(Debug, Clone)]
pub struct DepartmentCreate {
    pub id: DepartmentId,
    pub name: String,
}

impl DepartmentCreate {
    pub fn new(id: impl Into<DepartmentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
}
