//! Entity trait implementation for [`Department`].

use super::actions::{DepartmentAction, DepartmentActionResult};
use super::DepartmentError;
use crate::association::{insert_unique, remove_item};
use crate::model::{Department, DepartmentCreate, DepartmentId, DepartmentUpdate};
use crate::validation;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Department {
    type Id = DepartmentId;
    type Create = DepartmentCreate;
    type Update = DepartmentUpdate;
    type Action = DepartmentAction;
    type ActionResult = DepartmentActionResult;
    type Context = ();
    type Error = DepartmentError;

    fn from_create_params(params: DepartmentCreate) -> Result<Self, DepartmentError> {
        validation::non_empty("department name", &params.name)?;
        Ok(Department {
            id: params.id,
            name: params.name,
            head: None,
            members: Vec::new(),
            courses: Vec::new(),
        })
    }

    fn id(&self) -> &DepartmentId {
        &self.id
    }

    async fn on_update(&mut self, update: DepartmentUpdate, _ctx: &()) -> Result<(), DepartmentError> {
        if let Some(name) = update.name {
            validation::non_empty("department name", &name)?;
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: DepartmentAction,
        _ctx: &(),
    ) -> Result<DepartmentActionResult, DepartmentError> {
        let result = match action {
            DepartmentAction::AddMember(member) => {
                DepartmentActionResult::AddMember(insert_unique(&mut self.members, member).applied())
            }
            DepartmentAction::RemoveMember(member) => {
                if self.head.as_ref() == Some(&member) {
                    self.head = None;
                }
                DepartmentActionResult::RemoveMember(remove_item(&mut self.members, &member).applied())
            }
            DepartmentAction::AddCourse(course) => {
                DepartmentActionResult::AddCourse(insert_unique(&mut self.courses, course).applied())
            }
            DepartmentAction::RemoveCourse(course) => {
                DepartmentActionResult::RemoveCourse(remove_item(&mut self.courses, &course).applied())
            }
            DepartmentAction::AppointHead(head) => {
                if !self.members.contains(&head) {
                    return Err(DepartmentError::NotAMember(head));
                }
                let changed = self.head.as_ref() != Some(&head);
                if changed {
                    info!(dept_id = %self.id, %head, "Head appointed");
                }
                self.head = Some(head);
                DepartmentActionResult::AppointHead(changed)
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseId, PartyId};

    fn mathematics() -> Department {
        Department::from_create_params(DepartmentCreate::new("DEPT001", "Mathematics")).unwrap()
    }

    #[tokio::test]
    async fn head_must_be_a_member_and_leaves_with_membership() {
        let mut dept = mathematics();
        let smith = PartyId::from("T001");

        let err = dept
            .handle_action(DepartmentAction::AppointHead(smith.clone()), &())
            .await
            .unwrap_err();
        assert_eq!(err, DepartmentError::NotAMember(smith.clone()));

        dept.handle_action(DepartmentAction::AddMember(smith.clone()), &())
            .await
            .unwrap();
        let appointed = dept
            .handle_action(DepartmentAction::AppointHead(smith.clone()), &())
            .await
            .unwrap();
        assert_eq!(appointed, DepartmentActionResult::AppointHead(true));
        assert_eq!(dept.head(), Some(&smith));

        dept.handle_action(DepartmentAction::RemoveMember(smith), &())
            .await
            .unwrap();
        assert_eq!(dept.head(), None);
        assert!(dept.members().is_empty());
    }

    #[tokio::test]
    async fn courses_have_set_semantics() {
        let mut dept = mathematics();
        let algebra = CourseId::from("C001");

        let first = dept
            .handle_action(DepartmentAction::AddCourse(algebra.clone()), &())
            .await
            .unwrap();
        let again = dept
            .handle_action(DepartmentAction::AddCourse(algebra.clone()), &())
            .await
            .unwrap();
        assert_eq!(first, DepartmentActionResult::AddCourse(true));
        assert_eq!(again, DepartmentActionResult::AddCourse(false));
        assert_eq!(dept.summary().total_courses, 1);

        let removed = dept
            .handle_action(DepartmentAction::RemoveCourse(algebra), &())
            .await
            .unwrap();
        assert_eq!(removed, DepartmentActionResult::RemoveCourse(true));
    }
}
