//! Role buckets produced by the allocator.

use serde::{Deserialize, Serialize};

use super::{Participant, Role};

/// Participants partitioned by assigned role.
///
/// The three buckets are disjoint and together hold every participant
/// given to the allocator exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSet {
    /// Participants assigned to tank.
    pub tanks: Vec<Participant>,
    /// Participants assigned to healer.
    pub healers: Vec<Participant>,
    /// Participants assigned to damage.
    pub damage: Vec<Participant>,
}

impl TeamSet {
    /// Creates an empty team set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a team set from pre-built buckets.
    pub fn from_buckets(
        tanks: Vec<Participant>,
        healers: Vec<Participant>,
        damage: Vec<Participant>,
    ) -> Self {
        Self {
            tanks,
            healers,
            damage,
        }
    }

    /// The bucket for `role`.
    pub fn bucket(&self, role: Role) -> &[Participant] {
        match role {
            Role::Tank => &self.tanks,
            Role::Healer => &self.healers,
            Role::Damage => &self.damage,
        }
    }

    /// Total participants across all buckets.
    pub fn participant_count(&self) -> usize {
        self.tanks.len() + self.healers.len() + self.damage.len()
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.participant_count() == 0
    }

    /// Teams needed to seat everyone: `max(|T|, |H|, ceil(|D| / 3))`.
    pub fn team_count(&self) -> usize {
        self.tanks
            .len()
            .max(self.healers.len())
            .max(self.damage.len().div_ceil(3))
    }

    /// Role a participant was placed in, searching by equality.
    pub fn role_of(&self, participant: &Participant) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|&role| self.bucket(role).contains(participant))
    }
}
