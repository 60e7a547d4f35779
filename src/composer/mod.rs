//! Roster composition and coverage metrics.
//!
//! Turns role buckets into numbered teams of five and summarizes how
//! many seats still need stand-ins.
//!
//! # Placement
//!
//! Tanks and healers are seated positionally. Damage players are spread
//! with a serpentine walk over the teams so the (already shuffled) damage
//! bucket is consumed evenly from both ends.

mod builder;
mod kpi;
mod serpentine;

pub use builder::{ComposerConfig, HealerIndexing, RosterComposer};
pub use kpi::RosterKpi;
pub use serpentine::serpentine_order;

use crate::models::{Roster, TeamSet};

/// Composes a roster with the default configuration.
pub fn compose_roster(teams: &TeamSet) -> Roster {
    RosterComposer::new().compose(teams)
}
