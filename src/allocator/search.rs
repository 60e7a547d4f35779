//! Exhaustive split search.
//!
//! # Algorithm
//!
//! Every ambiguous bucket contributes one split dimension: each dual
//! bucket a split point `k ∈ [0, n]`, the flex bucket a pair
//! `(tank, healer)` with `tank + healer ≤ n` (the rest play damage).
//! The search walks the Cartesian product of all dimensions and keeps
//! the candidate with the lowest [`SplitScore`].
//!
//! Only role counts matter for the deficit, so any concrete assignment
//! of ambiguous participants is matched by some split point.
//!
//! # Complexity
//! O(d1 · d2 · d3 · f²) where `di` are dual bucket sizes plus one and `f`
//! the flex bucket size. Mismatch costs are precomputed per split point,
//! so each candidate is O(1).
//!
//! Flex candidates carry no mismatch cost: every flex split scores zero
//! and flex participants are placed in random order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::buckets::Buckets;
use super::preference::{split_costs, MismatchPenalties};
use crate::models::{DualPair, Role};

/// Chosen split for every ambiguous bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitPoint {
    /// Tank/healer duals sent to tank.
    pub tank_healer: usize,
    /// Tank/damage duals sent to tank.
    pub tank_damage: usize,
    /// Healer/damage duals sent to healer.
    pub healer_damage: usize,
    /// Flex participants sent to tank.
    pub flex_tank: usize,
    /// Flex participants sent to healer.
    pub flex_healer: usize,
}

/// Participants per role for a candidate split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub tank: usize,
    pub healer: usize,
    pub damage: usize,
}

/// Stand-ins needed to complete every formable team.
///
/// `tank` and `healer` count missing teams' worth of that role;
/// `damage` counts individual damage seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deficit {
    pub tank: usize,
    pub healer: usize,
    pub damage: usize,
}

impl Deficit {
    /// Computes the capacity-normalized deficit for the given counts.
    ///
    /// Tank and healer counts are scaled by the damage seats per team so
    /// all roles are measured in damage-seat units; damage is rounded up
    /// to whole teams.
    pub fn from_counts(counts: RoleCounts) -> Self {
        const UNIT: usize = Role::Damage.seats_per_team();

        let tank_eff = counts.tank * UNIT;
        let healer_eff = counts.healer * UNIT;
        let damage_eff = counts.damage.div_ceil(UNIT) * UNIT;
        let cap = tank_eff.max(healer_eff).max(damage_eff);

        Self {
            tank: (cap - tank_eff) / UNIT,
            healer: (cap - healer_eff) / UNIT,
            damage: cap - counts.damage,
        }
    }

    /// Combined tank and healer stand-ins.
    pub fn tank_healer(&self) -> usize {
        self.tank + self.healer
    }
}

/// Objective value of a candidate split. Smaller is better.
///
/// Compared lexicographically by:
/// 1. tank + healer stand-ins
/// 2. damage stand-ins
/// 3. tank stand-ins
/// 4. preference mismatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitScore {
    pub deficit: Deficit,
    pub mismatch: u64,
}

impl Ord for SplitScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deficit
            .tank_healer()
            .cmp(&other.deficit.tank_healer())
            .then_with(|| self.deficit.damage.cmp(&other.deficit.damage))
            .then_with(|| self.deficit.tank.cmp(&other.deficit.tank))
            .then_with(|| self.mismatch.cmp(&other.mismatch))
    }
}

impl PartialOrd for SplitScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub split: SplitPoint,
    pub score: SplitScore,
    pub counts: RoleCounts,
    /// Number of candidate splits scored.
    pub evaluated: usize,
}

/// The candidate space of a bucketed participant list.
#[derive(Debug, Clone)]
pub struct SearchSpace {
    fixed: RoleCounts,
    tank_healer_costs: Vec<u64>,
    tank_damage_costs: Vec<u64>,
    healer_damage_costs: Vec<u64>,
    flex: usize,
}

impl SearchSpace {
    /// Precomputes split costs for every dual bucket.
    pub fn new(buckets: &Buckets, penalties: &MismatchPenalties) -> Self {
        let costs = |pair| split_costs(&buckets.dual(pair).strengths(), penalties);
        Self {
            fixed: RoleCounts {
                tank: buckets.only_tank.len(),
                healer: buckets.only_healer.len(),
                damage: buckets.only_damage.len(),
            },
            tank_healer_costs: costs(DualPair::TankHealer),
            tank_damage_costs: costs(DualPair::TankDamage),
            healer_damage_costs: costs(DualPair::HealerDamage),
            flex: buckets.flex.len(),
        }
    }

    fn dual_sizes(&self) -> (usize, usize, usize) {
        (
            self.tank_healer_costs.len() - 1,
            self.tank_damage_costs.len() - 1,
            self.healer_damage_costs.len() - 1,
        )
    }

    /// Number of candidate splits.
    pub fn size(&self) -> usize {
        let (th, td, hd) = self.dual_sizes();
        let flex_pairs = (self.flex + 1) * (self.flex + 2) / 2;
        (th + 1) * (td + 1) * (hd + 1) * flex_pairs
    }

    /// All candidate splits, tank/healer outermost and flex healer innermost.
    pub fn splits(&self) -> impl Iterator<Item = SplitPoint> {
        let (th, td, hd) = self.dual_sizes();
        let flex = self.flex;

        (0..=th).flat_map(move |tank_healer| {
            (0..=td).flat_map(move |tank_damage| {
                (0..=hd).flat_map(move |healer_damage| {
                    (0..=flex).flat_map(move |flex_tank| {
                        (0..=flex - flex_tank).map(move |flex_healer| SplitPoint {
                            tank_healer,
                            tank_damage,
                            healer_damage,
                            flex_tank,
                            flex_healer,
                        })
                    })
                })
            })
        })
    }

    /// Role counts resulting from `split`.
    pub fn counts(&self, split: &SplitPoint) -> RoleCounts {
        let (th, td, hd) = self.dual_sizes();
        RoleCounts {
            tank: self.fixed.tank + split.tank_healer + split.tank_damage + split.flex_tank,
            healer: self.fixed.healer
                + (th - split.tank_healer)
                + split.healer_damage
                + split.flex_healer,
            damage: self.fixed.damage
                + (td - split.tank_damage)
                + (hd - split.healer_damage)
                + (self.flex - split.flex_tank - split.flex_healer),
        }
    }

    /// Total preference mismatch of `split`.
    pub fn mismatch(&self, split: &SplitPoint) -> u64 {
        self.tank_healer_costs[split.tank_healer]
            .saturating_add(self.tank_damage_costs[split.tank_damage])
            .saturating_add(self.healer_damage_costs[split.healer_damage])
    }

    /// Objective value of `split`.
    pub fn score(&self, split: &SplitPoint) -> SplitScore {
        SplitScore {
            deficit: Deficit::from_counts(self.counts(split)),
            mismatch: self.mismatch(split),
        }
    }

    /// Finds the best split.
    ///
    /// Ties on every criterion go to the candidate visited last.
    pub fn best(&self) -> SearchOutcome {
        let origin = SplitPoint::default();
        let (split, score) = self
            .splits()
            .map(|split| (split, self.score(&split)))
            .fold((origin, self.score(&origin)), |best, candidate| {
                if candidate.1 <= best.1 {
                    candidate
                } else {
                    best
                }
            });

        SearchOutcome {
            split,
            score,
            counts: self.counts(&split),
            evaluated: self.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Participant};

    fn score(th: usize, d: usize, t: usize, mismatch: u64) -> SplitScore {
        SplitScore {
            deficit: Deficit {
                tank: t,
                healer: th - t,
                damage: d,
            },
            mismatch,
        }
    }

    #[test]
    fn test_deficit_balanced() {
        let d = Deficit::from_counts(RoleCounts {
            tank: 1,
            healer: 1,
            damage: 3,
        });
        assert_eq!(d, Deficit::default());
    }

    #[test]
    fn test_deficit_damage_rounding() {
        // 2 tanks, 1 healer, 4 damage: cap = max(6, 3, 6) = 6
        let d = Deficit::from_counts(RoleCounts {
            tank: 2,
            healer: 1,
            damage: 4,
        });
        assert_eq!(d.tank, 0);
        assert_eq!(d.healer, 1);
        assert_eq!(d.damage, 2);
    }

    #[test]
    fn test_deficit_empty() {
        assert_eq!(Deficit::from_counts(RoleCounts::default()), Deficit::default());
    }

    #[test]
    fn test_score_ordering_priority() {
        // Tank+healer coverage dominates everything else.
        assert!(score(0, 9, 0, 999) < score(1, 0, 0, 0));
        // Then damage stand-ins.
        assert!(score(1, 1, 1, 999) < score(1, 2, 0, 0));
        // Then tank stand-ins alone.
        assert!(score(1, 1, 0, 999) < score(1, 1, 1, 0));
        // Mismatch last.
        assert!(score(1, 1, 1, 10) < score(1, 1, 1, 11));
        assert_eq!(score(2, 1, 1, 5).cmp(&score(2, 1, 1, 5)), Ordering::Equal);
    }

    fn space_for(list: &[Participant]) -> SearchSpace {
        let buckets = Buckets::partition(list).unwrap();
        SearchSpace::new(&buckets, &MismatchPenalties::default())
    }

    #[test]
    fn test_space_size_matches_iterator() {
        let w = Level::Willing;
        let list = vec![
            Participant::new("th").with_tank(w).with_healer(w),
            Participant::new("td1").with_tank(w).with_damage(w),
            Participant::new("td2").with_tank(w).with_damage(w),
            Participant::new("f1").with_tank(w).with_healer(w).with_damage(w),
            Participant::new("f2").with_tank(w).with_healer(w).with_damage(w),
        ];
        let space = space_for(&list);

        // 2 * 3 * 1 * (flex pairs for n=2: 6)
        assert_eq!(space.size(), 36);
        assert_eq!(space.splits().count(), 36);
        assert!(space
            .splits()
            .all(|s| s.flex_tank + s.flex_healer <= 2 && s.tank_damage <= 2));
    }

    #[test]
    fn test_empty_space_has_single_candidate() {
        let space = space_for(&[]);
        assert_eq!(space.size(), 1);

        let outcome = space.best();
        assert_eq!(outcome.split, SplitPoint::default());
        assert_eq!(outcome.score, SplitScore::default());
        assert_eq!(outcome.counts, RoleCounts::default());
    }

    #[test]
    fn test_counts_conserve_participants() {
        let w = Level::Willing;
        let list = vec![
            Participant::new("t").with_tank(w),
            Participant::new("th").with_tank(w).with_healer(w),
            Participant::new("hd").with_healer(w).with_damage(w),
            Participant::new("f").with_tank(w).with_healer(w).with_damage(w),
        ];
        let space = space_for(&list);

        for split in space.splits() {
            let c = space.counts(&split);
            assert_eq!(c.tank + c.healer + c.damage, list.len());
        }
    }

    #[test]
    fn test_best_prefers_coverage_over_preference() {
        // Two tank/healer duals who both want to heal, next to one fixed
        // healer. Fewer tank stand-ins outranks mismatch, so both tank.
        let mut list = vec![
            Participant::new("h").with_healer(Level::Preferred),
            Participant::new("a")
                .with_tank(Level::Willing)
                .with_healer(Level::Preferred),
            Participant::new("b")
                .with_tank(Level::Willing)
                .with_healer(Level::Preferred),
        ];
        list.extend((0..6).map(|i| Participant::new(format!("d{i}")).with_damage(Level::Preferred)));
        let outcome = space_for(&list).best();

        assert_eq!(outcome.split.tank_healer, 2);
        assert_eq!(outcome.score.deficit.tank, 0);
        assert_eq!(outcome.score.deficit.healer, 1);
        assert_eq!(outcome.score.deficit.damage, 0);
        assert_eq!(outcome.score.mismatch, 1000);
    }

    #[test]
    fn test_last_equal_candidate_wins() {
        // Either the tank/damage dual or the flex player can tank; both
        // layouts form one full team with no mismatch. The tank/damage
        // dimension is iterated outermost, so "dual tanks" is visited last.
        let w = Level::Willing;
        let list = vec![
            Participant::new("h").with_healer(w),
            Participant::new("d1").with_damage(w),
            Participant::new("d2").with_damage(w),
            Participant::new("td").with_tank(w).with_damage(w),
            Participant::new("f").with_tank(w).with_healer(w).with_damage(w),
        ];
        let space = space_for(&list);
        let outcome = space.best();

        assert_eq!(outcome.score, SplitScore::default());
        assert_eq!(
            outcome.split,
            SplitPoint {
                tank_damage: 1,
                ..SplitPoint::default()
            }
        );
        let ties = space
            .splits()
            .filter(|s| space.score(s) == outcome.score)
            .count();
        assert_eq!(ties, 2);
    }
}
