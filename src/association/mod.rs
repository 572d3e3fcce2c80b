//! # Associations
//!
//! The bookkeeping behind every link between a party and a course, a room or another party.
//!
//! - [`Occupancy`] is the capacity gate of a resource: the only place that decides whether a
//!   course or room has space for one more member.
//! - [`ExclusiveSlot`] holds a one-to-one link (patient → room, patient → doctor,
//!   course → teacher).
//!
//! Both sides of an association are owned by different registries. The resource's actor drives
//! the whole operation (gate, mirror update on the party, local update) while handling a single
//! message, so nothing observes a half-linked pair.
//!
//! Rejections are ordinary outcomes, not errors: linking a full course yields
//! [`LinkOutcome::AtCapacity`], unlinking a pair that was never linked yields
//! [`UnlinkOutcome::NotLinked`].

mod occupancy;
mod slot;

pub use occupancy::Occupancy;
pub use slot::ExclusiveSlot;

use serde::Serialize;

/// Result of an attempt to link two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkOutcome {
    /// Both sides now reference each other.
    Linked,
    /// The link (or, for exclusive links, another link of the same kind) already exists.
    AlreadyLinked,
    /// The resource has no free place left.
    AtCapacity,
}

impl LinkOutcome {
    /// `true` when the link was created by this call.
    pub fn applied(self) -> bool {
        matches!(self, LinkOutcome::Linked)
    }
}

/// Result of an attempt to remove a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnlinkOutcome {
    Unlinked,
    NotLinked,
}

impl UnlinkOutcome {
    pub fn applied(self) -> bool {
        matches!(self, UnlinkOutcome::Unlinked)
    }
}

/// Result of inserting into a registry.
///
/// A second insertion under a known identifier is reported, and the first record stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Registration {
    Registered,
    Duplicate,
}

impl Registration {
    pub fn applied(self) -> bool {
        matches!(self, Registration::Registered)
    }
}

/// Inserts into a plain (unbounded) membership list, keeping set semantics.
pub(crate) fn insert_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> LinkOutcome {
    if items.contains(&item) {
        return LinkOutcome::AlreadyLinked;
    }
    items.push(item);
    LinkOutcome::Linked
}

/// Removes from a plain membership list.
pub(crate) fn remove_item<T: PartialEq>(items: &mut Vec<T>, item: &T) -> UnlinkOutcome {
    match items.iter().position(|existing| existing == item) {
        Some(index) => {
            items.remove(index);
            UnlinkOutcome::Unlinked
        }
        None => UnlinkOutcome::NotLinked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_report_whether_they_applied() {
        assert!(LinkOutcome::Linked.applied());
        assert!(!LinkOutcome::AlreadyLinked.applied());
        assert!(!LinkOutcome::AtCapacity.applied());
        assert!(UnlinkOutcome::Unlinked.applied());
        assert!(!UnlinkOutcome::NotLinked.applied());
        assert!(Registration::Registered.applied());
        assert!(!Registration::Duplicate.applied());
    }

    #[test]
    fn membership_lists_never_hold_duplicates() {
        let mut courses = vec!["C001"];
        assert_eq!(insert_unique(&mut courses, "C001"), LinkOutcome::AlreadyLinked);
        assert_eq!(insert_unique(&mut courses, "C002"), LinkOutcome::Linked);
        assert_eq!(courses, vec!["C001", "C002"]);

        assert_eq!(remove_item(&mut courses, &"C001"), UnlinkOutcome::Unlinked);
        assert_eq!(remove_item(&mut courses, &"C001"), UnlinkOutcome::NotLinked);
        assert_eq!(courses, vec!["C002"]);
    }
}
