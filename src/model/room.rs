use super::{PartyId, RoomId};
use crate::association::Occupancy;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const DEFAULT_BEDS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "ICU")]
    Icu,
    Private,
    General,
    Emergency,
}

impl Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoomType::Icu => "ICU",
            RoomType::Private => "Private",
            RoomType::General => "General",
            RoomType::Emergency => "Emergency",
        };
        f.write_str(name)
    }
}

/// A hospital room. Beds bound the number of admitted patients.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub(crate) id: RoomId,
    pub number: u32,
    pub room_type: RoomType,
    pub(crate) beds: Occupancy<PartyId>,
}

impl Room {
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn occupants(&self) -> &[PartyId] {
        self.beds.members()
    }

    pub fn capacity(&self) -> usize {
        self.beds.capacity()
    }

    pub fn is_available(&self) -> bool {
        !self.beds.is_full()
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            room_id: self.id.clone(),
            number: self.number,
            room_type: self.room_type,
            occupants: self.occupants().to_vec(),
            capacity: self.capacity(),
            is_available: self.is_available(),
        }
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Room {}", self.room_type, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSummary {
    pub room_id: RoomId,
    pub number: u32,
    pub room_type: RoomType,
    pub occupants: Vec<PartyId>,
    pub capacity: usize,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub id: RoomId,
    pub number: u32,
    pub room_type: RoomType,
    pub beds: usize,
}

impl RoomCreate {
    pub fn new(id: impl Into<RoomId>, number: u32, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            number,
            room_type,
            beds: DEFAULT_BEDS,
        }
    }

    pub fn beds(mut self, beds: usize) -> Self {
        self.beds = beds;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub room_type: Option<RoomType>,
}
