use super::{LinkOutcome, UnlinkOutcome};
use serde::Serialize;

/// One side of a one-to-one link: holds at most one counterpart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExclusiveSlot<T> {
    holder: Option<T>,
}

impl<T> Default for ExclusiveSlot<T> {
    fn default() -> Self {
        Self { holder: None }
    }
}

impl<T: PartialEq> ExclusiveSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holder(&self) -> Option<&T> {
        self.holder.as_ref()
    }

    pub fn is_held(&self) -> bool {
        self.holder.is_some()
    }

    /// Fills the slot. A held slot is left alone, whoever holds it.
    pub fn assign(&mut self, value: T) -> LinkOutcome {
        if self.holder.is_some() {
            return LinkOutcome::AlreadyLinked;
        }
        self.holder = Some(value);
        LinkOutcome::Linked
    }

    /// Empties the slot only if `expected` holds it.
    pub fn release_matching(&mut self, expected: &T) -> UnlinkOutcome {
        if self.holder.as_ref() == Some(expected) {
            self.holder = None;
            UnlinkOutcome::Unlinked
        } else {
            UnlinkOutcome::NotLinked
        }
    }

    /// Empties the slot, returning the previous holder.
    pub fn take(&mut self) -> Option<T> {
        self.holder.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_assignment_is_a_no_op() {
        let mut room = ExclusiveSlot::new();
        assert_eq!(room.assign("R101"), LinkOutcome::Linked);
        assert_eq!(room.assign("R102"), LinkOutcome::AlreadyLinked);
        assert_eq!(room.holder(), Some(&"R101"));
    }

    #[test]
    fn release_requires_the_current_holder() {
        let mut doctor = ExclusiveSlot::new();
        doctor.assign("D001");
        assert_eq!(doctor.release_matching(&"D002"), UnlinkOutcome::NotLinked);
        assert!(doctor.is_held());
        assert_eq!(doctor.release_matching(&"D001"), UnlinkOutcome::Unlinked);
        assert!(!doctor.is_held());
        assert_eq!(doctor.take(), None);
    }
}
