//! Eligibility bucketing.
//!
//! Routes every participant into exactly one of seven buckets by the
//! roles they declared. Single-role buckets need no decision; the three
//! dual buckets and the flex bucket are resolved by the split search.

use crate::error::AllocationError;
use crate::models::{DualPair, Eligibility, Participant, Role};

use super::PreferenceStrength;

/// A dual-role participant tagged with their preference strength.
#[derive(Debug, Clone, PartialEq)]
pub struct Weighted {
    pub participant: Participant,
    pub strength: PreferenceStrength,
}

/// A dual bucket, sorted left-leaning first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DualBucket {
    members: Vec<Weighted>,
}

impl DualBucket {
    fn push(&mut self, participant: Participant, strength: PreferenceStrength) {
        self.members.push(Weighted {
            participant,
            strength,
        });
    }

    fn sort(&mut self) {
        // Stable: equal strengths keep sign-up order.
        self.members.sort_by_key(|w| w.strength);
    }

    /// Number of participants in the bucket.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in sorted order.
    pub fn members(&self) -> &[Weighted] {
        &self.members
    }

    /// Strength of each member, in sorted order.
    pub fn strengths(&self) -> Vec<PreferenceStrength> {
        self.members.iter().map(|w| w.strength).collect()
    }

    /// Splits at `k`: the first `k` participants and the rest.
    pub(crate) fn split(self, k: usize) -> (Vec<Participant>, Vec<Participant>) {
        let mut left: Vec<Participant> = self.members.into_iter().map(|w| w.participant).collect();
        let right = left.split_off(k.min(left.len()));
        (left, right)
    }
}

/// Participants grouped by eligibility mask.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    /// Tank only.
    pub only_tank: Vec<Participant>,
    /// Healer only.
    pub only_healer: Vec<Participant>,
    /// Damage only.
    pub only_damage: Vec<Participant>,
    /// Tank or healer.
    pub tank_healer: DualBucket,
    /// Tank or damage.
    pub tank_damage: DualBucket,
    /// Healer or damage.
    pub healer_damage: DualBucket,
    /// Any role.
    pub flex: Vec<Participant>,
}

impl Buckets {
    /// Buckets every participant and sorts the dual buckets.
    ///
    /// # Errors
    /// [`AllocationError::InvariantViolation`] for a participant with no role.
    pub fn partition(participants: &[Participant]) -> Result<Self, AllocationError> {
        let mut buckets = Buckets::default();

        for (index, participant) in participants.iter().enumerate() {
            let eligibility =
                participant
                    .eligibility()
                    .ok_or_else(|| AllocationError::InvariantViolation {
                        index,
                        name: participant.name.clone(),
                    })?;
            buckets.insert(participant.clone(), eligibility);
        }

        buckets.tank_healer.sort();
        buckets.tank_damage.sort();
        buckets.healer_damage.sort();

        Ok(buckets)
    }

    fn insert(&mut self, participant: Participant, eligibility: Eligibility) {
        match eligibility {
            Eligibility::Single(Role::Tank) => self.only_tank.push(participant),
            Eligibility::Single(Role::Healer) => self.only_healer.push(participant),
            Eligibility::Single(Role::Damage) => self.only_damage.push(participant),
            Eligibility::Dual { pair, left, right } => {
                let strength = PreferenceStrength::between(left, right);
                self.dual_mut(pair).push(participant, strength);
            }
            Eligibility::Flex => self.flex.push(participant),
        }
    }

    /// The dual bucket for `pair`.
    pub fn dual(&self, pair: DualPair) -> &DualBucket {
        match pair {
            DualPair::TankHealer => &self.tank_healer,
            DualPair::TankDamage => &self.tank_damage,
            DualPair::HealerDamage => &self.healer_damage,
        }
    }

    fn dual_mut(&mut self, pair: DualPair) -> &mut DualBucket {
        match pair {
            DualPair::TankHealer => &mut self.tank_healer,
            DualPair::TankDamage => &mut self.tank_damage,
            DualPair::HealerDamage => &mut self.healer_damage,
        }
    }

    /// Number of participants across all buckets.
    pub fn len(&self) -> usize {
        self.only_tank.len()
            + self.only_healer.len()
            + self.only_damage.len()
            + self.tank_healer.len()
            + self.tank_damage.len()
            + self.healer_damage.len()
            + self.flex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
