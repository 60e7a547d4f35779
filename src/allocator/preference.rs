//! Preference strength and split mismatch costs.
//!
//! A dual-role participant is scored on a 7-step scale describing how much
//! they favor the left role of their pair over the right one. A sorted
//! dual bucket is then split at some point `k`: the first `k` go left,
//! the rest go right. Each split point has a mismatch cost that penalizes
//! participants sent to the side they like less.

use serde::{Deserialize, Serialize};

use crate::models::Level;

/// How much a dual-role participant favors the left role over the right.
///
/// Ordered from most left-leaning to most right-leaning, so sorting a
/// bucket ascending puts left-leaning participants first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreferenceStrength {
    StrongLeft,
    Left,
    WeakLeft,
    Equal,
    WeakRight,
    Right,
    StrongRight,
}

impl PreferenceStrength {
    /// Computes the strength from the left and right levels.
    ///
    /// - `Preferred` vs `Willing` is strong.
    /// - `Fallback` vs `Willing` is normal.
    /// - `Preferred` vs `Fallback` is weak.
    pub fn between(left: Level, right: Level) -> Self {
        use std::cmp::Ordering;

        match left.cmp(&right) {
            Ordering::Equal => PreferenceStrength::Equal,
            Ordering::Greater => {
                if left == Level::Preferred && right == Level::Willing {
                    PreferenceStrength::StrongLeft
                } else if left == Level::Fallback {
                    PreferenceStrength::Left
                } else {
                    PreferenceStrength::WeakLeft
                }
            }
            Ordering::Less => Self::between(right, left).mirror(),
        }
    }

    /// The same strength seen from the other side.
    pub fn mirror(self) -> Self {
        match self {
            PreferenceStrength::StrongLeft => PreferenceStrength::StrongRight,
            PreferenceStrength::Left => PreferenceStrength::Right,
            PreferenceStrength::WeakLeft => PreferenceStrength::WeakRight,
            PreferenceStrength::Equal => PreferenceStrength::Equal,
            PreferenceStrength::WeakRight => PreferenceStrength::WeakLeft,
            PreferenceStrength::Right => PreferenceStrength::Left,
            PreferenceStrength::StrongRight => PreferenceStrength::StrongLeft,
        }
    }
}

/// Penalties for placing a participant on the side they like less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MismatchPenalties {
    /// `WeakLeft` sent right, or `WeakRight` sent left.
    pub weak: u32,
    /// `Left` sent right, or `Right` sent left.
    pub normal: u32,
    /// `StrongLeft` sent right, or `StrongRight` sent left.
    pub strong: u32,
}

impl Default for MismatchPenalties {
    fn default() -> Self {
        Self {
            weak: 10,
            normal: 100,
            strong: 500,
        }
    }
}

impl MismatchPenalties {
    /// Cost of sending a participant with `strength` to the left role.
    pub fn sent_left(&self, strength: PreferenceStrength) -> u32 {
        match strength {
            PreferenceStrength::WeakRight => self.weak,
            PreferenceStrength::Right => self.normal,
            PreferenceStrength::StrongRight => self.strong,
            _ => 0,
        }
    }

    /// Cost of sending a participant with `strength` to the right role.
    pub fn sent_right(&self, strength: PreferenceStrength) -> u32 {
        self.sent_left(strength.mirror())
    }
}

/// Mismatch cost for every split point `k ∈ [0, n]` of a sorted bucket.
///
/// `costs[k]` charges `sent_left` for the first `k` strengths and
/// `sent_right` for the remaining `n - k`. Sums saturate at `u64::MAX`.
pub fn split_costs(strengths: &[PreferenceStrength], penalties: &MismatchPenalties) -> Vec<u64> {
    let mut costs = vec![0u64; strengths.len() + 1];

    let mut left = 0u64;
    for (k, &s) in strengths.iter().enumerate() {
        left = left.saturating_add(u64::from(penalties.sent_left(s)));
        costs[k + 1] = left;
    }

    let mut right = 0u64;
    for (k, &s) in strengths.iter().enumerate().rev() {
        right = right.saturating_add(u64::from(penalties.sent_right(s)));
        costs[k] = costs[k].saturating_add(right);
    }

    costs
}
