//! Entity trait implementation for [`Room`].

use super::actions::{RoomAction, RoomActionResult};
use super::{RoomContext, RoomError};
use crate::association::{LinkOutcome, Occupancy, UnlinkOutcome};
use crate::model::{Link, PartyId, Room, RoomCreate, RoomId, RoomUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Room {
    type Id = RoomId;
    type Create = RoomCreate;
    type Update = RoomUpdate;
    type Action = RoomAction;
    type ActionResult = RoomActionResult;
    type Context = RoomContext;
    type Error = RoomError;

    fn from_create_params(params: RoomCreate) -> Result<Self, RoomError> {
        Ok(Room {
            id: params.id,
            number: params.number,
            room_type: params.room_type,
            beds: Occupancy::new(params.beds)?,
        })
    }

    fn id(&self) -> &RoomId {
        &self.id
    }

    async fn on_update(&mut self, update: RoomUpdate, _ctx: &RoomContext) -> Result<(), RoomError> {
        if let Some(room_type) = update.room_type {
            self.room_type = room_type;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &RoomContext) -> Result<(), RoomError> {
        if !self.beds.is_empty() {
            return Err(RoomError::StillLinked(self.id.clone()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RoomAction,
        ctx: &RoomContext,
    ) -> Result<RoomActionResult, RoomError> {
        match action {
            RoomAction::Admit(patient) => self.admit(patient, ctx).await.map(RoomActionResult::Admit),
            RoomAction::Discharge(patient) => self
                .discharge(patient, ctx)
                .await
                .map(RoomActionResult::Discharge),
        }
    }
}

impl Room {
    async fn admit(&mut self, patient: PartyId, ctx: &RoomContext) -> Result<LinkOutcome, RoomError> {
        if let Some(rejection) = self.beds.gate(&patient) {
            debug!(room_id = %self.id, party_id = %patient, ?rejection, "Admission rejected");
            return Ok(rejection);
        }

        // The patient's exclusive slot decides whether it is free to move in.
        let mirrored = ctx
            .patients
            .attach(patient.clone(), Link::Room(self.id.clone()))
            .await
            .map_err(|e| RoomError::from_party(&patient, e))?;
        if !mirrored.applied() {
            debug!(room_id = %self.id, party_id = %patient, "Patient already admitted elsewhere");
            return Ok(mirrored);
        }

        let outcome = self.beds.admit(patient.clone());
        info!(
            room_id = %self.id,
            party_id = %patient,
            occupants = self.beds.len(),
            capacity = self.beds.capacity(),
            "Linked"
        );
        Ok(outcome)
    }

    async fn discharge(&mut self, patient: PartyId, ctx: &RoomContext) -> Result<UnlinkOutcome, RoomError> {
        if !self.beds.contains(&patient) {
            debug!(room_id = %self.id, party_id = %patient, "Not in this room, nothing to discharge");
            return Ok(UnlinkOutcome::NotLinked);
        }

        ctx.patients
            .detach(patient.clone(), Link::Room(self.id.clone()))
            .await
            .map_err(|e| RoomError::from_party(&patient, e))?;

        let outcome = self.beds.release(&patient);
        info!(room_id = %self.id, party_id = %patient, occupants = self.beds.len(), "Unlinked");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoomType;
    use crate::validation::ValidationError;

    #[test]
    fn rooms_default_to_a_single_bed() {
        let room = Room::from_create_params(RoomCreate::new("R101", 101, RoomType::Private)).unwrap();
        assert_eq!(room.capacity(), 1);
        assert!(room.is_available());
        assert_eq!(room.to_string(), "Private - Room 101");
    }

    #[test]
    fn bedless_rooms_are_rejected() {
        let params = RoomCreate::new("R000", 0, RoomType::General).beds(0);
        assert_eq!(
            Room::from_create_params(params).unwrap_err(),
            RoomError::Validation(ValidationError::ZeroCapacity)
        );
    }
}
