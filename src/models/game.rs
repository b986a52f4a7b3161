//! Voting rounds, the night shooting record and the best-move submission.

use serde::{Deserialize, Serialize};

/// A nested tie-break round inside a voting (at most 2 per voting).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revote {
    /// Slots on the ballot, in table order.
    pub candidates: Vec<u8>,
    /// Vote counts, parallel to `candidates`.
    pub votes: Vec<u32>,
}

/// One day voting: candidates, their vote counts, who left the table,
/// and any tie-break rounds that followed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voting {
    /// Voting number 1..=6, sequential within a game.
    pub number: u8,
    pub candidates: Vec<u8>,
    /// Vote counts, parallel to `candidates`.
    pub votes: Vec<u32>,
    /// Slots eliminated by this voting (after any revotes).
    pub eliminated: Vec<u8>,
    pub revotes: Vec<Revote>,
}

impl Voting {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            candidates: Vec::new(),
            votes: Vec::new(),
            eliminated: Vec::new(),
            revotes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Which night a shot belongs to: the opening ("first blood") shot, or
/// one of the numbered nights 1..=6.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Night {
    First,
    Night(u8),
}

impl std::fmt::Display for Night {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Night::First => write!(f, "first"),
            Night::Night(n) => write!(f, "night {n}"),
        }
    }
}

/// Outcome of one night shot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shot {
    /// Not recorded yet.
    #[default]
    Empty,
    /// Shot fired but no one left the table (miss marker on the protocol).
    Miss,
    /// The given slot was eliminated.
    Hit(u8),
}

impl Shot {
    pub fn hit_slot(self) -> Option<u8> {
        match self {
            Shot::Hit(slot) => Some(slot),
            _ => None,
        }
    }
}

/// One line of the shooting record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootingEntry {
    pub night: Night,
    pub shot: Shot,
}

/// Full shooting record: the first-blood slot plus nights 1..=6.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootingRecord {
    pub entries: Vec<ShootingEntry>,
}

impl ShootingRecord {
    pub fn new() -> Self {
        let mut entries = vec![ShootingEntry {
            night: Night::First,
            shot: Shot::Empty,
        }];
        for n in 1..=crate::constants::MAX_NIGHTS {
            entries.push(ShootingEntry {
                night: Night::Night(n),
                shot: Shot::Empty,
            });
        }
        Self { entries }
    }

    pub fn get(&self, night: Night) -> Option<Shot> {
        self.entries
            .iter()
            .find(|e| e.night == night)
            .map(|e| e.shot)
    }

    pub fn set(&mut self, night: Night, shot: Shot) -> bool {
        match self.entries.iter_mut().find(|e| e.night == night) {
            Some(entry) => {
                entry.shot = shot;
                true
            }
            None => false,
        }
    }

    /// Distinct slots eliminated by night shots, in record order.
    pub fn hit_slots(&self) -> Vec<u8> {
        let mut slots = Vec::new();
        for e in &self.entries {
            if let Shot::Hit(slot) = e.shot {
                if !slots.contains(&slot) {
                    slots.push(slot);
                }
            }
        }
        slots
    }
}

impl Default for ShootingRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// The first-killed player's guess at the black team, as submitted to the judge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    /// Raw comma-separated guess list, kept verbatim for the protocol.
    pub numbers: String,
    /// Slot of the first night elimination, resolved from the shooting record.
    pub first_killed_slot: Option<u8>,
}

/// Result of evaluating a best-move guess against the actual roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BestMoveResult {
    /// Points awarded to the first-killed seat.
    pub bonus: f64,
    /// Correct guesses (0..=3), mirrored into the seat's `pu` field.
    pub pu: u8,
    /// True when `bonus > 0`.
    pub applied: bool,
}
