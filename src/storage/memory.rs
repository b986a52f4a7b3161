//! In-memory `GameStore`, used by the web binary and the tests.

use crate::models::{PlayerId, PlayerIdentity, StoredGame};
use crate::storage::{Backup, GameStore, StoreError};
use chrono::NaiveDate;

/// Roster and saved games held in plain vectors.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: Vec<PlayerIdentity>,
    games: Vec<StoredGame>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn get_players(&self) -> Vec<PlayerIdentity> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| a.nickname.cmp(&b.nickname));
        players
    }

    fn add_player(&mut self, nickname: &str) -> Result<PlayerIdentity, StoreError> {
        if self.players.iter().any(|p| p.nickname == nickname) {
            return Err(StoreError::DuplicateNickname(nickname.to_string()));
        }
        let player = PlayerIdentity::new(nickname);
        self.players.push(player.clone());
        Ok(player)
    }

    fn rename_player(&mut self, id: PlayerId, nickname: &str) -> Result<(), StoreError> {
        if self
            .players
            .iter()
            .any(|p| p.id != id && p.nickname == nickname)
        {
            return Err(StoreError::DuplicateNickname(nickname.to_string()));
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::PlayerNotFound(id.to_string()))?;
        player.nickname = nickname.to_string();
        Ok(())
    }

    fn delete_player(&mut self, id: PlayerId) -> Result<(), StoreError> {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        if self.players.len() == before {
            return Err(StoreError::PlayerNotFound(id.to_string()));
        }
        Ok(())
    }

    fn update_player_stats(
        &mut self,
        nickname: &str,
        won: bool,
        points: f64,
        bonus: f64,
        penalty: f64,
    ) -> Result<(), StoreError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.nickname == nickname)
            .ok_or_else(|| StoreError::PlayerNotFound(nickname.to_string()))?;
        player.games_count += 1;
        if won {
            player.wins_count += 1;
        }
        player.total_points += points;
        player.bonus_points += bonus;
        player.penalty_points += penalty;
        Ok(())
    }

    fn save_game(&mut self, game: StoredGame) -> Result<(), StoreError> {
        self.games.push(game);
        Ok(())
    }

    fn get_games(&self, range: Option<(NaiveDate, NaiveDate)>) -> Vec<StoredGame> {
        let mut games: Vec<StoredGame> = match range {
            Some((start, end)) => self
                .games
                .iter()
                .filter(|g| g.game_date >= start && g.game_date <= end)
                .cloned()
                .collect(),
            None => self.games.clone(),
        };
        games.sort_by(|a, b| {
            b.game_date
                .cmp(&a.game_date)
                .then(b.created_at.cmp(&a.created_at))
        });
        games
    }

    fn export_all(&self) -> Backup {
        Backup {
            players: self.get_players(),
            games: self.get_games(None),
            export_date: chrono::Utc::now(),
        }
    }

    fn import_all(&mut self, backup: Backup) -> Result<(), StoreError> {
        self.players = backup.players;
        self.games = backup.games;
        Ok(())
    }
}
