//! Roster composition from role buckets.
//!
//! # Algorithm
//!
//! 1. `team_count = max(|T|, |H|, ceil(|D| / 3))`.
//! 2. Tank seat of team `i` is `T[i]`.
//! 3. Healer seat of team `i` per [`HealerIndexing`].
//! 4. Damage seats are filled team by team in serpentine order. The
//!    `s`-th visited team takes `D[s]`, `D[n + s]` and `D[2n + s]`, so
//!    no team draws its three damage players from adjacent positions.
//!
//! Missing bucket entries leave the seat empty.
//!
//! # Complexity
//! O(n) in the number of teams.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::serpentine::serpentine_order;
use crate::models::{Roster, Team, TeamSet, DAMAGE_SEATS};

/// How healer seats are indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealerIndexing {
    /// Team `i` takes `H[team_count - i]`.
    ///
    /// Team 0 always looks past the end of the bucket and `H[0]` is never
    /// seated. Kept as the default pending a decision on whether the
    /// asymmetry with tank seating is intended.
    #[default]
    Offset,
    /// Team `i` takes `H[i]`, like tanks.
    Direct,
}

impl HealerIndexing {
    fn index(self, team_ix: usize, team_count: usize) -> usize {
        match self {
            HealerIndexing::Offset => team_count - team_ix,
            HealerIndexing::Direct => team_ix,
        }
    }
}

/// Composer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Healer seat indexing; defaults to [`HealerIndexing::Offset`].
    pub healer_indexing: HealerIndexing,
}

impl ComposerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets healer seat indexing.
    pub fn with_healer_indexing(mut self, indexing: HealerIndexing) -> Self {
        self.healer_indexing = indexing;
        self
    }
}

/// Lays out role buckets into numbered teams.
///
/// # Example
///
/// ```
/// use u_roster::composer::{ComposerConfig, HealerIndexing, RosterComposer};
/// use u_roster::models::{Level, Participant, TeamSet};
///
/// let p = |name: &str| Participant::new(name).with_damage(Level::Willing);
/// let teams = TeamSet::from_buckets(
///     vec![p("t")],
///     vec![p("h")],
///     vec![p("d1"), p("d2"), p("d3")],
/// );
///
/// let composer = RosterComposer::new()
///     .with_config(ComposerConfig::new().with_healer_indexing(HealerIndexing::Direct));
/// let roster = composer.compose(&teams);
/// assert_eq!(roster.team_count(), 1);
/// assert!(roster.teams[0].is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterComposer {
    config: ComposerConfig,
}

impl RosterComposer {
    /// Creates a composer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: ComposerConfig) -> Self {
        self.config = config;
        self
    }

    /// Composes a roster. Never fails; empty buckets give an empty roster.
    pub fn compose(&self, teams: &TeamSet) -> Roster {
        let team_count = teams.team_count();
        let indexing = self.config.healer_indexing;

        let mut roster = Roster {
            teams: (0..team_count)
                .map(|i| Team {
                    tank: teams.tanks.get(i).cloned(),
                    healer: teams
                        .healers
                        .get(indexing.index(i, team_count))
                        .cloned(),
                    damage: Default::default(),
                })
                .collect(),
        };

        for (step, team_ix) in serpentine_order(team_count).enumerate() {
            let team = &mut roster.teams[team_ix];
            for seat in 0..DAMAGE_SEATS {
                team.damage[seat] = teams.damage.get(seat * team_count + step).cloned();
            }
        }

        debug!(
            team_count,
            healer_indexing = ?indexing,
            seated = roster.seated().count(),
            "roster composed"
        );
        roster
    }
}
