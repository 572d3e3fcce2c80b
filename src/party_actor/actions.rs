//! Custom actions for the Party actor.
//!
//! `Attach`/`Detach` are the mirror half of an association: they are sent by the registry that
//! owns the other side (a course, a room, the appointment book) while it holds its own entity.
//! Their payload, [`Mirror`], can only be built inside this crate, so a link is never recorded
//! on the party alone.
//! `AssignDoctor`/`ReleaseDoctor` run on the patient registry and drive the doctor side
//! themselves.

use crate::association::{LinkOutcome, UnlinkOutcome};
use crate::model::{CourseId, Link, PartyId, VitalSigns};

/// The party side of a link, sent by the registry holding the other side.
#[derive(Debug, Clone, PartialEq)]
pub struct Mirror(Link);

impl Mirror {
    pub(crate) fn new(link: Link) -> Self {
        Self(link)
    }

    pub fn link(&self) -> &Link {
        &self.0
    }

    pub(crate) fn into_link(self) -> Link {
        self.0
    }
}

#[derive(Debug, Clone)]
pub enum PartyAction {
    /// Records one side of a link on this party.
    Attach(Mirror),
    /// Removes one side of a link, with any state derived from it.
    Detach(Mirror),
    /// Gives a patient its doctor, mirrored on the doctor's patient list.
    AssignDoctor(PartyId),
    ReleaseDoctor,
    /// Sets (or replaces) a student's grade for an enrolled course.
    PostGrade { course: CourseId, grade: f64 },
    /// Appends a timestamped history line.
    RecordHistory(String),
    /// Adds an allergy unless it is already listed.
    AddAllergy(String),
    RecordVitals(VitalSigns),
}

/// Results from PartyActions - variants match 1:1 with PartyAction
#[derive(Debug, Clone, PartialEq)]
pub enum PartyActionResult {
    Attach(LinkOutcome),
    Detach(UnlinkOutcome),
    AssignDoctor(LinkOutcome),
    ReleaseDoctor(UnlinkOutcome),
    PostGrade(()),
    RecordHistory(()),
    /// `true` when the allergy was new.
    AddAllergy(bool),
    RecordVitals(()),
}
