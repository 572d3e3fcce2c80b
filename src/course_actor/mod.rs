//! # Course Actor
//!
//! Manages courses and owns the student ↔ course and course ↔ teacher associations.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Course`]
//! - [`error`] - [`CourseError`] type for type-safe error handling
//! - [`actions`] - [`CourseAction`] and [`CourseActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (courses, course_client) = course_actor::new(32);
//! tokio::spawn(courses.run(CourseContext::new(student_client.clone(), teacher_client.clone())));
//!
//! course_client.register(CourseCreate::new("C001", "Algebra I", "Intro", 3).max_students(25)).await?;
//! let outcome = course_client.enroll(CourseId::from("C001"), PartyId::from("S001")).await?;
//! assert!(outcome.applied());
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{CourseClient, PartyClient};
use crate::model::Course;
use actor_framework::ResourceActor;

/// Party registries a course mirrors its links onto.
#[derive(Clone)]
pub struct CourseContext {
    pub students: PartyClient,
    pub teachers: PartyClient,
}

impl CourseContext {
    pub fn new(students: PartyClient, teachers: PartyClient) -> Self {
        Self { students, teachers }
    }
}

/// Creates a new Course actor and its client.
pub fn new(mailbox: usize) -> (ResourceActor<Course>, CourseClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox);
    (actor, CourseClient::new(generic_client))
}
