//! Team composition optimizer.
//!
//! Places participants with graded role preferences into teams of one
//! tank, one healer and three damage, maximizing how many teams are
//! covered by real participants and then honoring preferences.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `Level`, `Role`,
//!   `TeamSet`, `Roster`, `ParticipantList`
//! - **`allocator`**: Eligibility bucketing and the exhaustive split search
//! - **`composer`**: Serpentine roster layout and coverage KPIs
//! - **`validation`**: Participant checks (empty names, missing roles)
//!
//! # Pipeline
//!
//! ```
//! use u_roster::{allocate_roles, compose_roster};
//! use u_roster::models::{Level, Participant};
//!
//! let participants = vec![
//!     Participant::new("Ayla").with_tank(Level::Preferred),
//!     Participant::new("Bo").with_healer(Level::Preferred).with_damage(Level::Willing),
//!     Participant::new("Cy").with_damage(Level::Preferred),
//! ];
//!
//! let teams = allocate_roles(&participants).unwrap();
//! let roster = compose_roster(&teams);
//! assert_eq!(roster.team_count(), 1);
//! ```
//!
//! Both shuffles inside the allocator draw from an injectable random
//! source; use [`allocator::RoleAllocator::allocate_with_rng`] for
//! reproducible runs.

pub mod allocator;
pub mod composer;
pub mod error;
pub mod models;
pub mod validation;

pub use allocator::allocate_roles;
pub use composer::compose_roster;
pub use error::AllocationError;
