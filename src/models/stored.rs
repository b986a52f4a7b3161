//! Frozen game snapshots: what the persistence collaborator stores.

use crate::models::game::{BestMove, ShootingRecord, Voting};
use crate::models::player::{Seat, Team};
use crate::models::session::GameMeta;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a stored game.
pub type GameId = Uuid;

/// The complete protocol body, frozen at save time. Later edits to the
/// roster or to live sessions never touch it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    pub seats: Vec<Seat>,
    pub votings: Vec<Voting>,
    pub shootings: ShootingRecord,
    pub best_move: BestMove,
    pub notes: String,
}

/// A saved game: header fields plus the frozen protocol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredGame {
    pub id: GameId,
    pub game_date: NaiveDate,
    pub meta: GameMeta,
    pub winner_team: Team,
    pub protocol: Protocol,
    pub created_at: DateTime<Utc>,
}

impl StoredGame {
    pub fn new(game_date: NaiveDate, meta: GameMeta, winner_team: Team, protocol: Protocol) -> Self {
        Self {
            id: Uuid::new_v4(),
            game_date,
            meta,
            winner_team,
            protocol,
            created_at: Utc::now(),
        }
    }
}
