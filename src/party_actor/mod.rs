//! # Party Actor
//!
//! One registry per role: the school runs a student and a teacher registry, the hospital a
//! patient and a doctor registry. All four are `ResourceActor<Party>` instances; the
//! [`PartyContext`] handed to `run()` fixes which role a registry accepts.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Party`]
//! - [`error`] - [`PartyError`] type for type-safe error handling
//! - [`actions`] - [`PartyAction`] and [`PartyActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Coordination
//!
//! Course, room and appointment registries call into party registries to mirror their links.
//! The patient registry additionally calls the doctor registry when a doctor is assigned, so
//! its context carries the doctor client:
//!
//! ```rust,ignore
//! let (doctors, doctor_client) = party_actor::new(32);
//! let (patients, patient_client) = party_actor::new(32);
//!
//! tokio::spawn(doctors.run(PartyContext::standalone(RoleKind::Doctor)));
//! tokio::spawn(patients.run(PartyContext::with_care_team(doctor_client.clone())));
//!
//! patient_client.assign_doctor(PartyId::from("P001"), PartyId::from("D001")).await?;
//! ```
//!
//! Party registries never call course, room or appointment registries, which keeps the
//! coordination graph acyclic.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::PartyClient;
use crate::model::{Party, RoleKind};
use actor_framework::ResourceActor;

/// Runtime dependencies of a party registry.
#[derive(Clone)]
pub struct PartyContext {
    /// The only role this registry accepts.
    pub kind: RoleKind,
    /// Doctor registry, needed by the patient registry to assign doctors.
    pub care_team: Option<PartyClient>,
}

impl PartyContext {
    pub fn standalone(kind: RoleKind) -> Self {
        Self {
            kind,
            care_team: None,
        }
    }

    /// Context of a patient registry backed by `doctors`.
    pub fn with_care_team(doctors: PartyClient) -> Self {
        Self {
            kind: RoleKind::Patient,
            care_team: Some(doctors),
        }
    }
}

/// Creates a new Party actor and its client.
pub fn new(mailbox: usize) -> (ResourceActor<Party>, PartyClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox);
    (actor, PartyClient::new(generic_client))
}
