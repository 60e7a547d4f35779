//! Team composition domain models.
//!
//! Provides the data types shared by the allocator and the composer.
//!
//! # Roles
//!
//! | Role | Seats per team |
//! |------|----------------|
//! | Tank | 1 |
//! | Healer | 1 |
//! | Damage | 3 |

mod list;
mod participant;
mod roster;
mod team_set;

pub use list::ParticipantList;
pub use participant::{DualPair, Eligibility, Level, Participant, Role};
pub use roster::{NameDisplay, Roster, Seat, Team, DAMAGE_SEATS};
pub use team_set::TeamSet;
