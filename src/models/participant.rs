//! Participant model.
//!
//! A participant is a person who signed up for a team event and declared
//! a graded willingness for one or more roles. The role fields are fixed
//! at creation; the roster is rebuilt from scratch when the list changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A team role. Every team needs one tank, one healer and three damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tank,
    Healer,
    Damage,
}

impl Role {
    /// All roles in seat order.
    pub const ALL: [Role; 3] = [Role::Tank, Role::Healer, Role::Damage];

    /// Seats of this role in a single team.
    pub const fn seats_per_team(self) -> usize {
        match self {
            Role::Tank | Role::Healer => 1,
            Role::Damage => 3,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tank => write!(f, "tank"),
            Self::Healer => write!(f, "healer"),
            Self::Damage => write!(f, "damage"),
        }
    }
}

/// Graded willingness for a role (`Willing < Fallback < Preferred`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Will play the role if needed.
    Willing = 1,
    /// Second choice.
    Fallback = 2,
    /// First choice.
    Preferred = 3,
}

/// The two roles a dual-eligible participant is split between.
///
/// The first role is the "left" side of the split, the second the "right".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DualPair {
    TankHealer,
    TankDamage,
    HealerDamage,
}

impl DualPair {
    /// Role receiving the prefix of a split.
    pub fn left(self) -> Role {
        match self {
            DualPair::TankHealer | DualPair::TankDamage => Role::Tank,
            DualPair::HealerDamage => Role::Healer,
        }
    }

    /// Role receiving the suffix of a split.
    pub fn right(self) -> Role {
        match self {
            DualPair::TankHealer => Role::Healer,
            DualPair::TankDamage | DualPair::HealerDamage => Role::Damage,
        }
    }
}

/// Which roles a participant declared any level for.
///
/// Derived from the role fields, never stored. A participant with no
/// role has no eligibility (`Participant::eligibility` returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eligibility {
    /// Exactly one role.
    Single(Role),
    /// Exactly two roles, with the declared levels for each side.
    Dual {
        pair: DualPair,
        left: Level,
        right: Level,
    },
    /// All three roles.
    Flex,
}

/// A person to be placed into a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name.
    pub name: String,
    /// Willingness to tank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tank: Option<Level>,
    /// Willingness to heal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healer: Option<Level>,
    /// Willingness to deal damage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<Level>,
}

impl Participant {
    /// Creates a participant with no role levels set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tank: None,
            healer: None,
            damage: None,
        }
    }

    /// Sets the tank level.
    pub fn with_tank(mut self, level: Level) -> Self {
        self.tank = Some(level);
        self
    }

    /// Sets the healer level.
    pub fn with_healer(mut self, level: Level) -> Self {
        self.healer = Some(level);
        self
    }

    /// Sets the damage level.
    pub fn with_damage(mut self, level: Level) -> Self {
        self.damage = Some(level);
        self
    }

    /// Sets the level for an arbitrary role.
    pub fn with_level(self, role: Role, level: Level) -> Self {
        match role {
            Role::Tank => self.with_tank(level),
            Role::Healer => self.with_healer(level),
            Role::Damage => self.with_damage(level),
        }
    }

    /// Declared level for `role`, if any.
    pub fn level(&self, role: Role) -> Option<Level> {
        match role {
            Role::Tank => self.tank,
            Role::Healer => self.healer,
            Role::Damage => self.damage,
        }
    }

    /// Whether at least one role level is declared.
    pub fn has_any_role(&self) -> bool {
        self.eligibility().is_some()
    }

    /// Eligibility mask derived from the declared roles.
    pub fn eligibility(&self) -> Option<Eligibility> {
        let dual = |pair, left, right| Some(Eligibility::Dual { pair, left, right });
        match (self.tank, self.healer, self.damage) {
            (None, None, None) => None,
            (Some(_), None, None) => Some(Eligibility::Single(Role::Tank)),
            (None, Some(_), None) => Some(Eligibility::Single(Role::Healer)),
            (None, None, Some(_)) => Some(Eligibility::Single(Role::Damage)),
            (Some(t), Some(h), None) => dual(DualPair::TankHealer, t, h),
            (Some(t), None, Some(d)) => dual(DualPair::TankDamage, t, d),
            (None, Some(h), Some(d)) => dual(DualPair::HealerDamage, h, d),
            (Some(_), Some(_), Some(_)) => Some(Eligibility::Flex),
        }
    }
}
