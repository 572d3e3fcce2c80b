//! # Appointment Actor
//!
//! The appointment book. Creating an appointment validates both parties through their
//! registries (`on_create`) and records the appointment id on each, the way an order validates
//! its user and product before it is stored.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Appointment`]
//! - [`error`] - [`AppointmentError`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::{AppointmentClient, PartyClient};
use crate::model::Appointment;
use actor_framework::ResourceActor;

#[derive(Clone)]
pub struct AppointmentContext {
    pub patients: PartyClient,
    pub doctors: PartyClient,
}

impl AppointmentContext {
    pub fn new(patients: PartyClient, doctors: PartyClient) -> Self {
        Self { patients, doctors }
    }
}

/// Creates a new Appointment actor and its client.
pub fn new(mailbox: usize) -> (ResourceActor<Appointment>, AppointmentClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox);
    (actor, AppointmentClient::new(generic_client))
}
