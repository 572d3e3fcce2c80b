use super::{LinkOutcome, UnlinkOutcome};
use crate::validation::ValidationError;
use serde::Serialize;

/// The capacity-bounded member list of a resource.
///
/// Invariant: `len() <= capacity()` and no member appears twice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occupancy<M> {
    capacity: usize,
    members: Vec<M>,
}

impl<M: PartialEq> Occupancy<M> {
    pub fn new(capacity: usize) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            members: Vec::with_capacity(capacity),
        })
    }

    /// Checks whether `member` could be admitted right now.
    ///
    /// Returns the rejection, or `None` when [`admit`](Self::admit) would link. An existing
    /// member is reported before a full resource.
    pub fn gate(&self, member: &M) -> Option<LinkOutcome> {
        if self.members.contains(member) {
            Some(LinkOutcome::AlreadyLinked)
        } else if self.is_full() {
            Some(LinkOutcome::AtCapacity)
        } else {
            None
        }
    }

    pub fn admit(&mut self, member: M) -> LinkOutcome {
        if let Some(rejection) = self.gate(&member) {
            return rejection;
        }
        self.members.push(member);
        LinkOutcome::Linked
    }

    pub fn release(&mut self, member: &M) -> UnlinkOutcome {
        super::remove_item(&mut self.members, member)
    }

    pub fn contains(&self, member: &M) -> bool {
        self.members.contains(member)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// Members in admission order.
    pub fn members(&self) -> &[M] {
        &self.members
    }
}
