//! # Department Actor
//!
//! Departments group staff and courses for both facades. They hold one-sided sets of ids and
//! need no other registry (`Context = ()`).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::DepartmentClient;
use crate::model::Department;
use actor_framework::ResourceActor;

/// Creates a new Department actor and its client.
pub fn new(mailbox: usize) -> (ResourceActor<Department>, DepartmentClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox);
    (actor, DepartmentClient::new(generic_client))
}
