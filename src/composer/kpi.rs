//! Roster quality metrics (KPIs).
//!
//! Summarizes how well a composed roster is covered by real participants.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Team count | Number of teams in the roster |
//! | Complete teams | Teams with all five seats filled |
//! | Filled / open seats | Per role, occupied and empty seats |
//! | Fill rate | Filled seats / total seats |

use std::collections::HashMap;

use crate::models::{Role, Roster, Seat};

/// Roster coverage indicators.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Number of teams.
    pub team_count: usize,
    /// Teams with no empty seat.
    pub complete_teams: usize,
    /// Occupied seats per role.
    pub filled_by_role: HashMap<Role, usize>,
    /// Empty seats (stand-ins needed) per role.
    pub open_by_role: HashMap<Role, usize>,
    /// Fraction of seats held by real participants (0.0..1.0).
    pub fill_rate: f64,
}

impl RosterKpi {
    /// Computes KPIs for a roster.
    pub fn calculate(roster: &Roster) -> Self {
        let mut filled_by_role: HashMap<Role, usize> = Role::ALL.iter().map(|&r| (r, 0)).collect();
        let mut open_by_role = filled_by_role.clone();

        for team in &roster.teams {
            for seat in Seat::ALL {
                let bucket = if team.seat(seat).is_some() {
                    &mut filled_by_role
                } else {
                    &mut open_by_role
                };
                *bucket.entry(seat.role()).or_default() += 1;
            }
        }

        let filled: usize = filled_by_role.values().sum();
        let total = roster.team_count() * Seat::ALL.len();
        let fill_rate = if total == 0 {
            1.0
        } else {
            filled as f64 / total as f64
        };

        Self {
            team_count: roster.team_count(),
            complete_teams: roster.teams.iter().filter(|t| t.is_complete()).count(),
            filled_by_role,
            open_by_role,
            fill_rate,
        }
    }

    /// Total stand-ins needed across all roles.
    pub fn open_seats(&self) -> usize {
        self.open_by_role.values().sum()
    }

    /// Whether the roster meets the given coverage thresholds.
    pub fn meets_thresholds(&self, max_open_seats: usize, min_fill_rate: f64) -> bool {
        self.open_seats() <= max_open_seats && self.fill_rate >= min_fill_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Participant, Team};

    fn p(name: &str) -> Option<Participant> {
        Some(Participant::new(name).with_damage(Level::Willing))
    }

    #[test]
    fn test_kpi_basic() {
        let roster = Roster {
            teams: vec![
                Team {
                    tank: p("t0"),
                    healer: p("h0"),
                    damage: [p("d0"), p("d1"), p("d2")],
                },
                Team {
                    tank: p("t1"),
                    healer: None,
                    damage: [p("d3"), None, None],
                },
            ],
        };

        let kpi = RosterKpi::calculate(&roster);
        assert_eq!(kpi.team_count, 2);
        assert_eq!(kpi.complete_teams, 1);
        assert_eq!(kpi.filled_by_role[&Role::Tank], 2);
        assert_eq!(kpi.open_by_role[&Role::Healer], 1);
        assert_eq!(kpi.open_by_role[&Role::Damage], 2);
        assert_eq!(kpi.open_seats(), 3);
        assert!((kpi.fill_rate - 0.7).abs() < 1e-10); // 7 / 10
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = RosterKpi::calculate(&Roster::new());
        assert_eq!(kpi.team_count, 0);
        assert_eq!(kpi.open_seats(), 0);
        assert!((kpi.fill_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let roster = Roster {
            teams: vec![Team {
                tank: p("t"),
                healer: None,
                damage: [p("a"), p("b"), p("c")],
            }],
        };

        let kpi = RosterKpi::calculate(&roster);
        assert!(kpi.meets_thresholds(1, 0.8));
        assert!(!kpi.meets_thresholds(0, 0.0));
        assert!(!kpi.meets_thresholds(1, 0.9));
    }
}
