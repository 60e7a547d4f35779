//! Role allocator: bucketing, split search and placement.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use super::buckets::Buckets;
use super::search::{RoleCounts, SearchSpace, SplitPoint, SplitScore};
use super::AllocatorConfig;
use crate::error::AllocationError;
use crate::models::{Participant, TeamSet};

/// Outcome of a role allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Participants partitioned by role.
    pub teams: TeamSet,
    /// Winning split of the ambiguous buckets.
    pub split: SplitPoint,
    /// Deficit and mismatch of the winning split.
    pub score: SplitScore,
    /// Participants per role.
    pub counts: RoleCounts,
    /// Number of candidate splits scored.
    pub candidates_evaluated: usize,
}

/// Assigns every participant to exactly one role.
///
/// # Algorithm
/// 1. Bucket participants by eligibility; sort dual buckets left-leaning first.
/// 2. Score every split of the dual and flex buckets, keep the best.
/// 3. Place dual prefixes/suffixes and (shuffled) flex participants.
/// 4. Shuffle each output bucket.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_roster::allocator::RoleAllocator;
/// use u_roster::models::{Level, Participant};
///
/// let participants = vec![
///     Participant::new("Ayla").with_tank(Level::Preferred).with_healer(Level::Willing),
///     Participant::new("Bo").with_healer(Level::Preferred),
///     Participant::new("Cy").with_damage(Level::Preferred),
/// ];
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let allocation = RoleAllocator::new()
///     .allocate_with_rng(&participants, &mut rng)
///     .unwrap();
/// assert_eq!(allocation.teams.tanks[0].name, "Ayla");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoleAllocator {
    config: AllocatorConfig,
}

impl RoleAllocator {
    /// Creates an allocator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AllocatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates roles using the thread-local random source.
    pub fn allocate(&self, participants: &[Participant]) -> Result<Allocation, AllocationError> {
        self.allocate_with_rng(participants, &mut rand::rng())
    }

    /// Allocates roles, drawing both shuffles from `rng`.
    ///
    /// # Errors
    /// [`AllocationError::InvariantViolation`] if a participant declared no role.
    pub fn allocate_with_rng<R: Rng + ?Sized>(
        &self,
        participants: &[Participant],
        rng: &mut R,
    ) -> Result<Allocation, AllocationError> {
        let buckets = Buckets::partition(participants)?;
        debug!(
            only_tank = buckets.only_tank.len(),
            only_healer = buckets.only_healer.len(),
            only_damage = buckets.only_damage.len(),
            tank_healer = buckets.tank_healer.len(),
            tank_damage = buckets.tank_damage.len(),
            healer_damage = buckets.healer_damage.len(),
            flex = buckets.flex.len(),
            "participants bucketed"
        );

        let space = SearchSpace::new(&buckets, &self.config.penalties);
        trace!(candidates = space.size(), "searching splits");
        let outcome = space.best();
        debug!(
            split = ?outcome.split,
            tank_pugs = outcome.score.deficit.tank,
            healer_pugs = outcome.score.deficit.healer,
            damage_pugs = outcome.score.deficit.damage,
            mismatch = outcome.score.mismatch,
            "split selected"
        );

        let mut teams = place(buckets, &outcome.split, rng);
        if self.config.shuffle_output {
            teams.tanks.shuffle(rng);
            teams.healers.shuffle(rng);
            teams.damage.shuffle(rng);
        }

        Ok(Allocation {
            teams,
            split: outcome.split,
            score: outcome.score,
            counts: outcome.counts,
            candidates_evaluated: outcome.evaluated,
        })
    }
}

/// Distributes buckets according to `split`.
fn place<R: Rng + ?Sized>(buckets: Buckets, split: &SplitPoint, rng: &mut R) -> TeamSet {
    let Buckets {
        only_tank,
        only_healer,
        only_damage,
        tank_healer,
        tank_damage,
        healer_damage,
        mut flex,
    } = buckets;

    // Flex splits carry no preference weight, so their order is arbitrary.
    flex.shuffle(rng);
    let mut flex_healer = flex.split_off(split.flex_tank.min(flex.len()));
    let flex_damage = flex_healer.split_off(split.flex_healer.min(flex_healer.len()));
    let flex_tank = flex;

    let (th_tank, th_healer) = tank_healer.split(split.tank_healer);
    let (td_tank, td_damage) = tank_damage.split(split.tank_damage);
    let (hd_healer, hd_damage) = healer_damage.split(split.healer_damage);

    let mut teams = TeamSet::from_buckets(only_tank, only_healer, only_damage);
    teams.tanks.extend(th_tank.into_iter().chain(td_tank).chain(flex_tank));
    teams
        .healers
        .extend(th_healer.into_iter().chain(hd_healer).chain(flex_healer));
    teams
        .damage
        .extend(td_damage.into_iter().chain(hd_damage).chain(flex_damage));
    teams
}
