//! Persistence collaborator: the `GameStore` contract and an in-memory
//! implementation.
//!
//! The core never reaches for storage as ambient state; the binary owns a
//! store instance and injects it where needed. Every operation returns
//! `Result`, and callers never assume a save succeeded.

mod memory;

pub use memory::MemoryStore;

use crate::models::{PlayerId, PlayerIdentity, StoredGame};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Errors surfaced by the persistence collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Roster nicknames are unique.
    DuplicateNickname(String),
    /// No roster entry with this id or nickname.
    PlayerNotFound(String),
    /// Anything else the backing store reports.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::DuplicateNickname(name) => {
                write!(f, "A player named \"{name}\" already exists")
            }
            StoreError::PlayerNotFound(who) => write!(f, "Player not found: {who}"),
            StoreError::Backend(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Whole-database backup, for export/import from the admin screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub players: Vec<PlayerIdentity>,
    pub games: Vec<StoredGame>,
    pub export_date: chrono::DateTime<chrono::Utc>,
}

/// What the core expects from the persistence layer.
pub trait GameStore {
    /// Roster, ordered by nickname.
    fn get_players(&self) -> Vec<PlayerIdentity>;
    fn add_player(&mut self, nickname: &str) -> Result<PlayerIdentity, StoreError>;
    fn rename_player(&mut self, id: PlayerId, nickname: &str) -> Result<(), StoreError>;
    fn delete_player(&mut self, id: PlayerId) -> Result<(), StoreError>;

    /// Fold one finished game into a roster entry's career stats.
    fn update_player_stats(
        &mut self,
        nickname: &str,
        won: bool,
        points: f64,
        bonus: f64,
        penalty: f64,
    ) -> Result<(), StoreError>;

    fn save_game(&mut self, game: StoredGame) -> Result<(), StoreError>;
    /// Stored games, newest first, optionally limited to a date range.
    fn get_games(&self, range: Option<(NaiveDate, NaiveDate)>) -> Vec<StoredGame>;

    fn export_all(&self) -> Backup;
    /// Replace everything with the backup's contents.
    fn import_all(&mut self, backup: Backup) -> Result<(), StoreError>;
}
