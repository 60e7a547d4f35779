//! Owned, versioned participant list.
//!
//! Mirrors how a sign-up front end edits the list: append a validated
//! participant or remove one by position. Every successful edit bumps
//! the version so callers know when to recompute the roster; the
//! allocator only ever receives a snapshot.

use serde::{Deserialize, Serialize};

use super::Participant;
use crate::validation::{validate_participant, ValidationResult};

/// A participant list that can only grow by append and shrink by
/// positional removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantList {
    participants: Vec<Participant>,
    version: u64,
}

impl ParticipantList {
    /// Creates an empty list at version 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a participant.
    ///
    /// Invalid participants are rejected and the version is unchanged.
    pub fn push(&mut self, participant: Participant) -> ValidationResult {
        validate_participant(&participant)?;
        self.participants.push(participant);
        self.version += 1;
        Ok(())
    }

    /// Removes the participant at `index`, shifting later entries down.
    ///
    /// Returns `None` (and leaves the version unchanged) when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Participant> {
        if index >= self.participants.len() {
            return None;
        }
        self.version += 1;
        Some(self.participants.remove(index))
    }

    /// Monotonic edit counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Participants in insertion order.
    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    /// Owned copy of the current contents.
    pub fn snapshot(&self) -> Vec<Participant> {
        self.participants.clone()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_push_and_version() {
        let mut list = ParticipantList::new();
        assert_eq!(list.version(), 0);

        list.push(Participant::new("a").with_tank(Level::Preferred))
            .unwrap();
        list.push(Participant::new("b").with_damage(Level::Willing))
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.version(), 2);
        assert_eq!(list.as_slice()[1].name, "b");
    }

    #[test]
    fn test_push_rejects_invalid() {
        let mut list = ParticipantList::new();
        let errors = list.push(Participant::new("nobody")).unwrap_err();

        assert_eq!(errors[0].kind, ValidationErrorKind::NoRolePreference);
        assert!(list.is_empty());
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn test_remove_by_position() {
        let mut list = ParticipantList::new();
        for name in ["a", "b", "c"] {
            list.push(Participant::new(name).with_healer(Level::Fallback))
                .unwrap();
        }

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(list.version(), 4);

        let names: Vec<&str> = list.as_slice().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);

        assert!(list.remove(10).is_none());
        assert_eq!(list.version(), 4);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut list = ParticipantList::new();
        list.push(Participant::new("a").with_tank(Level::Willing))
            .unwrap();

        let snap = list.snapshot();
        list.remove(0);

        assert_eq!(snap.len(), 1);
        assert!(list.is_empty());
    }
}
