//! Role allocation.
//!
//! Decides which role every participant plays. Single-role participants
//! are placed directly; participants eligible for two or three roles are
//! resolved by an exhaustive split search.
//!
//! # Objective
//!
//! Lexicographic, smaller is better:
//! 1. tank + healer stand-ins across all formable teams
//! 2. damage stand-ins
//! 3. tank stand-ins
//! 4. preference mismatch
//!
//! # Submodules
//!
//! - [`preference`]: Preference strength and per-split mismatch costs
//! - [`search`]: Candidate space and the lexicographic score

mod buckets;
mod config;
mod engine;
pub mod preference;
pub mod search;

pub use buckets::{Buckets, DualBucket, Weighted};
pub use config::AllocatorConfig;
pub use engine::{Allocation, RoleAllocator};
pub use preference::{MismatchPenalties, PreferenceStrength};
pub use search::{Deficit, RoleCounts, SearchSpace, SplitPoint, SplitScore};

use crate::error::AllocationError;
use crate::models::{Participant, TeamSet};

/// Partitions participants into tank, healer and damage buckets.
///
/// Uses the default configuration and the thread-local random source.
/// See [`RoleAllocator`] for seeded runs and the full search report.
///
/// # Errors
/// [`AllocationError::InvariantViolation`] if a participant declared no role.
pub fn allocate_roles(participants: &[Participant]) -> Result<TeamSet, AllocationError> {
    RoleAllocator::new()
        .allocate(participants)
        .map(|allocation| allocation.teams)
}
