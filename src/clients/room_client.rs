//! # Room Client
use crate::association::{LinkOutcome, Registration, UnlinkOutcome};
use crate::model::{PartyId, Room, RoomCreate, RoomId, RoomUpdate};
use crate::room_actor::{RoomAction, RoomActionResult, RoomError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Room actor.
#[derive(Clone)]
pub struct RoomClient {
    inner: ResourceClient<Room>,
}

impl RoomClient {
    pub fn new(inner: ResourceClient<Room>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Room> for RoomClient {
    type Error = RoomError;

    fn inner(&self) -> &ResourceClient<Room> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RoomError::from_framework(e)
    }
}

impl RoomClient {
    #[instrument(skip(self, params), fields(id = %params.id))]
    pub async fn register(&self, params: RoomCreate) -> Result<Registration, RoomError> {
        debug!("Sending request");
        match self.inner.create(params).await {
            Ok(_) => Ok(Registration::Registered),
            Err(FrameworkError::AlreadyExists(_)) => Ok(Registration::Duplicate),
            Err(e) => Err(RoomError::from_framework(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_room(&self, id: RoomId, update: RoomUpdate) -> Result<Room, RoomError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(RoomError::from_framework)
    }

    #[instrument(skip(self))]
    pub async fn admit(&self, room: RoomId, patient: PartyId) -> Result<LinkOutcome, RoomError> {
        match self
            .inner
            .perform_action(room, RoomAction::Admit(patient))
            .await
            .map_err(RoomError::from_framework)?
        {
            RoomActionResult::Admit(outcome) => Ok(outcome),
            _ => unreachable!("Admit action must return Admit result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn discharge(&self, room: RoomId, patient: PartyId) -> Result<UnlinkOutcome, RoomError> {
        match self
            .inner
            .perform_action(room, RoomAction::Discharge(patient))
            .await
            .map_err(RoomError::from_framework)?
        {
            RoomActionResult::Discharge(outcome) => Ok(outcome),
            _ => unreachable!("Discharge action must return Discharge result"),
        }
    }

    /// Rooms with at least one free bed, in creation order.
    #[instrument(skip(self))]
    pub async fn available(&self) -> Result<Vec<Room>, RoomError> {
        let rooms = self.list().await?;
        Ok(rooms.into_iter().filter(Room::is_available).collect())
    }
}
