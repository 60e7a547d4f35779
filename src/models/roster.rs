//! Roster (composed teams) model.
//!
//! A roster is the final seating: an ordered list of teams with one tank
//! seat, one healer seat and three damage seats each. An empty seat means
//! no real participant was available and a stand-in has to be found at
//! event time.

use serde::{Deserialize, Serialize};

use super::{Participant, Role};

/// Damage seats per team.
pub const DAMAGE_SEATS: usize = Role::Damage.seats_per_team();

/// One team of five seats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub tank: Option<Participant>,
    pub healer: Option<Participant>,
    pub damage: [Option<Participant>; DAMAGE_SEATS],
}

/// A seat position within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Tank,
    Healer,
    /// Damage seat `0..3`.
    Damage(usize),
}

impl Seat {
    /// All five seats in display order.
    pub const ALL: [Seat; 5] = [
        Seat::Tank,
        Seat::Healer,
        Seat::Damage(0),
        Seat::Damage(1),
        Seat::Damage(2),
    ];

    /// Role this seat belongs to.
    pub fn role(self) -> Role {
        match self {
            Seat::Tank => Role::Tank,
            Seat::Healer => Role::Healer,
            Seat::Damage(_) => Role::Damage,
        }
    }
}

/// How seat occupants are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameDisplay {
    /// Participant names.
    Named,
    /// Positional labels (`Tank-1`, `Healer-1`, `DPS-1`..).
    #[default]
    Anonymized,
}

impl Team {
    /// Occupant of `seat`, if any.
    pub fn seat(&self, seat: Seat) -> Option<&Participant> {
        match seat {
            Seat::Tank => self.tank.as_ref(),
            Seat::Healer => self.healer.as_ref(),
            Seat::Damage(i) => self.damage.get(i).and_then(Option::as_ref),
        }
    }

    /// Number of occupied seats.
    pub fn filled_seats(&self) -> usize {
        Seat::ALL.iter().filter(|&&s| self.seat(s).is_some()).count()
    }

    /// Whether all five seats are occupied.
    pub fn is_complete(&self) -> bool {
        self.filled_seats() == Seat::ALL.len()
    }

    /// Iterates over occupied seats.
    pub fn members(&self) -> impl Iterator<Item = (Seat, &Participant)> {
        Seat::ALL
            .into_iter()
            .filter_map(move |s| self.seat(s).map(|p| (s, p)))
    }
}

/// Ordered list of composed teams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub teams: Vec<Team>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Whether the roster has no teams.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// All seated participants, team by team in seat order.
    pub fn seated(&self) -> impl Iterator<Item = &Participant> {
        self.teams.iter().flat_map(|t| t.members().map(|(_, p)| p))
    }

    /// Display text for a seat, or `None` when the seat is empty.
    ///
    /// With [`NameDisplay::Anonymized`] the label depends only on the
    /// position: `Tank-{n}` and `Healer-{n}` are numbered by team,
    /// `DPS-{n}` by damage seat across the whole roster.
    pub fn seat_label(&self, team_ix: usize, seat: Seat, display: NameDisplay) -> Option<String> {
        let occupant = self.teams.get(team_ix)?.seat(seat)?;
        Some(match display {
            NameDisplay::Named => occupant.name.clone(),
            NameDisplay::Anonymized => positional_label(team_ix, seat),
        })
    }
}

fn positional_label(team_ix: usize, seat: Seat) -> String {
    match seat {
        Seat::Tank => format!("Tank-{}", team_ix + 1),
        Seat::Healer => format!("Healer-{}", team_ix + 1),
        Seat::Damage(k) => format!("DPS-{}", team_ix * DAMAGE_SEATS + k + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn p(name: &str) -> Participant {
        Participant::new(name).with_damage(Level::Preferred)
    }

    fn sample_roster() -> Roster {
        Roster {
            teams: vec![
                Team {
                    tank: Some(p("t0")),
                    healer: None,
                    damage: [Some(p("d0")), Some(p("d1")), None],
                },
                Team {
                    tank: Some(p("t1")),
                    healer: Some(p("h1")),
                    damage: [Some(p("d2")), Some(p("d3")), Some(p("d4"))],
                },
            ],
        }
    }

    #[test]
    fn test_team_seats() {
        let roster = sample_roster();
        assert_eq!(roster.teams[0].filled_seats(), 3);
        assert!(!roster.teams[0].is_complete());
        assert!(roster.teams[1].is_complete());
        assert_eq!(roster.seated().count(), 8);
    }

    #[test]
    fn test_seat_label_named() {
        let roster = sample_roster();
        assert_eq!(
            roster.seat_label(1, Seat::Healer, NameDisplay::Named),
            Some("h1".to_string())
        );
        assert_eq!(roster.seat_label(0, Seat::Healer, NameDisplay::Named), None);
    }

    #[test]
    fn test_seat_label_anonymized() {
        let roster = sample_roster();
        let anon = NameDisplay::Anonymized;
        assert_eq!(roster.seat_label(0, Seat::Tank, anon).as_deref(), Some("Tank-1"));
        assert_eq!(roster.seat_label(1, Seat::Healer, anon).as_deref(), Some("Healer-2"));
        assert_eq!(roster.seat_label(0, Seat::Damage(1), anon).as_deref(), Some("DPS-2"));
        assert_eq!(roster.seat_label(1, Seat::Damage(2), anon).as_deref(), Some("DPS-6"));
        // Empty seats stay empty regardless of display mode.
        assert_eq!(roster.seat_label(0, Seat::Damage(2), anon), None);
        assert_eq!(roster.seat_label(5, Seat::Tank, anon), None);
    }

    #[test]
    fn test_name_display_serde() {
        assert_eq!(
            serde_json::to_string(&NameDisplay::Anonymized).unwrap(),
            r#""anonymized""#
        );
        let named: NameDisplay = serde_json::from_str(r#""named""#).unwrap();
        assert_eq!(named, NameDisplay::Named);
    }

    #[test]
    fn test_seat_roles() {
        assert_eq!(Seat::Tank.role(), Role::Tank);
        assert_eq!(Seat::Damage(2).role(), Role::Damage);
    }
}
