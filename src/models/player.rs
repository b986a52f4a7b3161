//! Roles, teams, seats (players-in-game) and the persistent roster entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a roster entry (persistent player identity).
pub type PlayerId = Uuid;

/// Role dealt to a seat for one game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Mafia,
    Don,
    Sheriff,
    Civilian,
}

impl Role {
    /// Mafia and Don form the black team; Sheriff and Civilian the red team.
    pub fn is_black(self) -> bool {
        matches!(self, Role::Mafia | Role::Don)
    }

    pub fn team(self) -> Team {
        if self.is_black() {
            Team::Mafia
        } else {
            Team::Civilians
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Mafia => "Mafia",
            Role::Don => "Don",
            Role::Sheriff => "Sheriff",
            Role::Civilian => "Civilian",
        };
        write!(f, "{name}")
    }
}

/// Which side won the game.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Mafia,
    Civilians,
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Mafia => write!(f, "Mafia"),
            Team::Civilians => write!(f, "Civilians"),
        }
    }
}

/// One of the 10 seats at the table during a game session.
///
/// `points`, `pu` and `is_first_killed` are derived: the session recomputes
/// them after every relevant edit, they are never set directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Seat number 1..=10, stable for the whole session.
    pub slot: u8,
    /// Nickname of the roster player seated here; empty until filled.
    pub nickname: String,
    pub role: Option<Role>,
    /// Ordinary fouls, informational only.
    pub fouls: u8,
    /// Technical fouls 0..=4; at 4 the player is disqualified.
    pub tech_fouls: u8,
    /// Manual additive adjustment ("Dop+"), non-negative.
    pub bonus_points: f64,
    /// Manual subtractive adjustment ("Dop--"), non-negative.
    pub penalty_points: f64,
    /// Derived total, rounded to 2 decimal places.
    pub points: f64,
    /// Derived correct-guess count (0..=3), set only on the first-killed seat.
    pub pu: u8,
    /// Self-elimination by own team; recorded on the protocol, no scoring effect.
    pub ss: bool,
    /// Role reveal; recorded on the protocol, no scoring effect.
    pub vskr: bool,
    /// Derived: this seat was the first night elimination.
    pub is_first_killed: bool,
}

impl Seat {
    pub fn new(slot: u8) -> Self {
        Self {
            slot,
            nickname: String::new(),
            role: None,
            fouls: 0,
            tech_fouls: 0,
            bonus_points: 0.0,
            penalty_points: 0.0,
            points: 0.0,
            pu: 0,
            ss: false,
            vskr: false,
            is_first_killed: false,
        }
    }

    pub fn is_filled(&self) -> bool {
        !self.nickname.is_empty()
    }

    pub fn is_disqualified(&self) -> bool {
        self.tech_fouls >= crate::constants::TECH_FOULS_LIMIT
    }

    /// Team this seat plays for; unset roles count as red (Civilians).
    pub fn team(&self) -> Team {
        self.role.map(Role::team).unwrap_or(Team::Civilians)
    }
}

/// Persistent roster entry with accumulated career stats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub id: PlayerId,
    pub nickname: String,
    pub games_count: u32,
    pub wins_count: u32,
    pub total_points: f64,
    pub bonus_points: f64,
    pub penalty_points: f64,
}

impl PlayerIdentity {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: nickname.into(),
            games_count: 0,
            wins_count: 0,
            total_points: 0.0,
            bonus_points: 0.0,
            penalty_points: 0.0,
        }
    }

    /// Career win percentage, 2 decimals; 0 when no games played.
    pub fn win_percentage(&self) -> f64 {
        if self.games_count == 0 {
            return 0.0;
        }
        let pct = self.wins_count as f64 / self.games_count as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// One row of the period standings table produced by the rating aggregator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    pub nickname: String,
    pub games: u32,
    pub wins: u32,
    /// wins / games * 100, 2 decimals, 0 when games = 0.
    pub win_percentage: f64,
    pub total_points: f64,
    pub bonus_points: f64,
    pub penalty_points: f64,
    /// 1-based place after sorting; ties get distinct sequential places.
    pub place: u32,
}
