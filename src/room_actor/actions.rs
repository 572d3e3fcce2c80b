//! Custom actions for the Room actor.

use crate::association::{LinkOutcome, UnlinkOutcome};
use crate::model::PartyId;

#[derive(Debug, Clone)]
pub enum RoomAction {
    /// Admits a patient into a free bed. A patient already in another room stays there.
    Admit(PartyId),
    Discharge(PartyId),
}

/// Results from RoomActions - variants match 1:1 with RoomAction
#[derive(Debug, Clone, PartialEq)]
pub enum RoomActionResult {
    Admit(LinkOutcome),
    Discharge(UnlinkOutcome),
}
