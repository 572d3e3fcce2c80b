//! # Roster
//!
//! Registries of people (students, teachers, patients, doctors) and of the resources they are
//! associated with (courses, rooms, departments, appointments), each running as an actor on
//! top of [`actor_framework`].
//!
//! ## Associations
//!
//! The interesting part of the crate is keeping both sides of a relationship in step:
//!
//! - **Capacity-bounded, many-to-many**: a student enrolls in a course. The course actor checks
//!   its [`Occupancy`](association::Occupancy), records the course on the student, then admits
//!   the student, all while handling one message.
//! - **Exclusive, one-to-one**: a patient occupies at most one room and has at most one doctor
//!   ([`ExclusiveSlot`](association::ExclusiveSlot)).
//!
//! Re-linking, a full resource and unlinking a missing pair are reported through
//! [`LinkOutcome`](association::LinkOutcome) and [`UnlinkOutcome`](association::UnlinkOutcome),
//! never as errors. Malformed input is an error and changes nothing.
//!
//! ## Module Tour
//!
//! - [`model`] - records, payloads and summaries
//! - [`association`] - capacity gate, exclusive slot and outcome types (synchronous)
//! - [`party_actor`], [`course_actor`], [`room_actor`], [`department_actor`],
//!   [`appointment_actor`] - [`ActorEntity`](actor_framework::ActorEntity) implementations
//! - [`clients`] - typed clients, one per registry
//! - [`lifecycle`] - the [`School`](lifecycle::School) and [`Hospital`](lifecycle::Hospital)
//!   facades that spawn and wire the actors
//! - [`config`] - environment-driven settings
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod appointment_actor;
pub mod association;
pub mod clients;
pub mod config;
pub mod course_actor;
pub mod department_actor;
pub mod lifecycle;
pub mod model;
pub mod party_actor;
pub mod room_actor;
pub mod validation;
