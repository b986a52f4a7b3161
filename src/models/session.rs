//! The in-memory game session: 10 seats, votings, shootings, best move.
//!
//! Every mutation that can affect scoring ends with `recompute_points`,
//! so callers always observe consistent derived state. Recomputation is
//! a plain idempotent function, not a reactive graph: it silently does
//! nothing until roles are locked and a winner is chosen, because the
//! UI calls it speculatively on every edit.

use crate::constants::{MAX_PLAYERS, MAX_REVOTES, MAX_VOTINGS};
use crate::logic;
use crate::models::game::{BestMove, Night, Revote, Shot, ShootingRecord, Voting};
use crate::models::player::{Role, Seat, Team};
use crate::models::stored::{Protocol, StoredGame};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a live session.
pub type SessionId = Uuid;

/// Errors from session mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Slot outside 1..=10.
    InvalidSlot(u8),
    /// Role edits are rejected once roles are locked.
    RolesLocked,
    /// Locking requires the exact 2/1/1/6 composition.
    RoleCompositionInvalid(Vec<String>),
    /// A field failed validation (nickname, adjustment, shooting cell, ...).
    InvalidField(String),
    /// Another seat already holds this nickname.
    DuplicateNickname(String),
    /// No voting with this number.
    VotingNotFound(u8),
    /// All 6 votings already exist.
    TooManyVotings,
    /// A voting carries at most 2 revote rounds.
    TooManyRevotes,
    /// Candidates and votes must be parallel sequences.
    VotesMismatch { candidates: usize, votes: usize },
    /// The protocol is not complete enough to save.
    NotReadyToSave(Vec<String>),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidSlot(slot) => {
                write!(f, "Slot {slot} is out of range (1-{MAX_PLAYERS})")
            }
            SessionError::RolesLocked => write!(f, "Roles are locked and can no longer be edited"),
            SessionError::RoleCompositionInvalid(errors) => {
                write!(f, "Role composition is invalid: {}", errors.join("; "))
            }
            SessionError::InvalidField(msg) => write!(f, "{msg}"),
            SessionError::DuplicateNickname(name) => {
                write!(f, "Player \"{name}\" is already seated")
            }
            SessionError::VotingNotFound(number) => write!(f, "No voting number {number}"),
            SessionError::TooManyVotings => {
                write!(f, "A game has at most {MAX_VOTINGS} votings")
            }
            SessionError::TooManyRevotes => {
                write!(f, "A voting has at most {MAX_REVOTES} revote rounds")
            }
            SessionError::VotesMismatch { candidates, votes } => write!(
                f,
                "Vote counts ({votes}) do not match candidates ({candidates})"
            ),
            SessionError::NotReadyToSave(errors) => {
                write!(f, "Protocol is not ready to save: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Tournament metadata shown on the protocol header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMeta {
    pub tournament: String,
    pub stage: String,
    pub table_number: String,
    pub game_number: String,
}

/// A game being scored, alive only in memory until saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: SessionId,
    pub date: Option<NaiveDate>,
    pub meta: GameMeta,
    /// Exactly 10 seats, slots 1..=10 in order.
    pub seats: Vec<Seat>,
    pub votings: Vec<Voting>,
    pub shootings: ShootingRecord,
    pub best_move: BestMove,
    pub winner_team: Option<Team>,
    /// Free-text judge notes for the protocol.
    pub notes: String,
    /// Once set, roles are immutable and scoring may proceed.
    pub roles_locked: bool,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            date: None,
            meta: GameMeta::default(),
            seats: (1..=MAX_PLAYERS).map(Seat::new).collect(),
            votings: Vec::new(),
            shootings: ShootingRecord::new(),
            best_move: BestMove::default(),
            winner_team: None,
            notes: String::new(),
            roles_locked: false,
        }
    }

    fn seat_mut(&mut self, slot: u8) -> Result<&mut Seat, SessionError> {
        self.seats
            .iter_mut()
            .find(|s| s.slot == slot)
            .ok_or(SessionError::InvalidSlot(slot))
    }

    pub fn seat(&self, slot: u8) -> Option<&Seat> {
        self.seats.iter().find(|s| s.slot == slot)
    }

    pub fn set_date(&mut self, raw: &str) -> Result<(), SessionError> {
        let date = logic::validate_date(raw).map_err(SessionError::InvalidField)?;
        self.date = Some(date);
        Ok(())
    }

    pub fn set_meta(&mut self, meta: GameMeta) {
        self.meta = meta;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Seat a roster player. Nickname is validated and must be unique
    /// across filled seats. An empty string clears the seat.
    pub fn set_nickname(&mut self, slot: u8, raw: &str) -> Result<(), SessionError> {
        if raw.trim().is_empty() {
            self.seat_mut(slot)?.nickname.clear();
            return Ok(());
        }
        let nickname = logic::validate_nickname(raw).map_err(SessionError::InvalidField)?;
        let taken = self
            .seats
            .iter()
            .any(|s| s.slot != slot && s.nickname == nickname);
        if taken {
            return Err(SessionError::DuplicateNickname(nickname));
        }
        self.seat_mut(slot)?.nickname = nickname;
        Ok(())
    }

    /// Assign or clear a role. Rejected once roles are locked.
    pub fn set_role(&mut self, slot: u8, role: Option<Role>) -> Result<(), SessionError> {
        if self.roles_locked {
            return Err(SessionError::RolesLocked);
        }
        self.seat_mut(slot)?.role = role;
        self.recompute_points();
        Ok(())
    }

    /// Fill unset roles with Civilian once 3 blacks + 1 Sheriff are dealt.
    pub fn auto_fill_roles(&mut self) -> Result<(), SessionError> {
        if self.roles_locked {
            return Err(SessionError::RolesLocked);
        }
        logic::auto_fill_roles(&mut self.seats);
        self.recompute_points();
        Ok(())
    }

    /// Freeze the role assignment. The 2/1/1/6 composition must hold.
    pub fn lock_roles(&mut self) -> Result<(), SessionError> {
        logic::validate_roles(&self.seats).map_err(SessionError::RoleCompositionInvalid)?;
        self.roles_locked = true;
        self.recompute_points();
        Ok(())
    }

    pub fn set_winner(&mut self, team: Option<Team>) {
        self.winner_team = team;
        self.recompute_points();
    }

    pub fn set_fouls(&mut self, slot: u8, fouls: u8) -> Result<(), SessionError> {
        self.seat_mut(slot)?.fouls = fouls;
        Ok(())
    }

    pub fn set_tech_fouls(&mut self, slot: u8, count: u8) -> Result<(), SessionError> {
        let count = logic::validate_tech_fouls(count).map_err(SessionError::InvalidField)?;
        self.seat_mut(slot)?.tech_fouls = count;
        Ok(())
    }

    /// Manual additive adjustment, parsed from judge input (comma or dot).
    pub fn set_bonus_points(&mut self, slot: u8, raw: &str) -> Result<(), SessionError> {
        let points = logic::validate_adjustment(raw).map_err(SessionError::InvalidField)?;
        self.seat_mut(slot)?.bonus_points = points;
        self.recompute_points();
        Ok(())
    }

    /// Manual subtractive adjustment.
    pub fn set_penalty_points(&mut self, slot: u8, raw: &str) -> Result<(), SessionError> {
        let points = logic::validate_adjustment(raw).map_err(SessionError::InvalidField)?;
        self.seat_mut(slot)?.penalty_points = points;
        self.recompute_points();
        Ok(())
    }

    pub fn set_ss(&mut self, slot: u8, value: bool) -> Result<(), SessionError> {
        self.seat_mut(slot)?.ss = value;
        Ok(())
    }

    pub fn set_vskr(&mut self, slot: u8, value: bool) -> Result<(), SessionError> {
        self.seat_mut(slot)?.vskr = value;
        Ok(())
    }

    /// Record one shooting cell from raw judge input (slot number, miss
    /// marker, or empty to clear). A hit in the first-blood cell resolves
    /// the best-move first-killed slot.
    pub fn record_shot(&mut self, night: Night, raw: &str) -> Result<(), SessionError> {
        let shot = match logic::validate_shooting(raw).map_err(SessionError::InvalidField)? {
            logic::ShootingInput::Empty => Shot::Empty,
            logic::ShootingInput::Miss => Shot::Miss,
            logic::ShootingInput::Slot(n) => Shot::Hit(n),
        };
        if !self.shootings.set(night, shot) {
            return Err(SessionError::InvalidField(format!(
                "No shooting entry for {night}"
            )));
        }
        if night == Night::First {
            self.best_move.first_killed_slot = shot.hit_slot();
            self.recompute_points();
        }
        Ok(())
    }

    /// Store the best-move guess list verbatim; scoring parses it.
    pub fn set_best_move_numbers(&mut self, raw: impl Into<String>) {
        self.best_move.numbers = raw.into();
        self.recompute_points();
    }

    /// Open the next voting (at most 6 per game). Returns its number.
    pub fn add_voting(&mut self) -> Result<u8, SessionError> {
        if self.votings.len() >= MAX_VOTINGS as usize {
            return Err(SessionError::TooManyVotings);
        }
        let number = self.votings.len() as u8 + 1;
        self.votings.push(Voting::new(number));
        Ok(number)
    }

    fn voting_mut(&mut self, number: u8) -> Result<&mut Voting, SessionError> {
        self.votings
            .iter_mut()
            .find(|v| v.number == number)
            .ok_or(SessionError::VotingNotFound(number))
    }

    pub fn voting(&self, number: u8) -> Option<&Voting> {
        self.votings.iter().find(|v| v.number == number)
    }

    /// Set a voting's ballot from a raw comma-separated slot list.
    pub fn set_voting_candidates(&mut self, number: u8, raw: &str) -> Result<(), SessionError> {
        let candidates = logic::validate_numbers_list(raw)
            .map_err(|errors| SessionError::InvalidField(errors.join("; ")))?;
        let voting = self.voting_mut(number)?;
        voting.candidates = candidates;
        voting.votes = vec![0; voting.candidates.len()];
        Ok(())
    }

    /// Record vote counts, parallel to the ballot.
    pub fn set_voting_votes(&mut self, number: u8, votes: Vec<u32>) -> Result<(), SessionError> {
        let voting = self.voting_mut(number)?;
        if votes.len() != voting.candidates.len() {
            return Err(SessionError::VotesMismatch {
                candidates: voting.candidates.len(),
                votes: votes.len(),
            });
        }
        voting.votes = votes;
        Ok(())
    }

    /// Record who left the table after this voting.
    pub fn set_voting_eliminated(&mut self, number: u8, raw: &str) -> Result<(), SessionError> {
        let eliminated = logic::validate_numbers_list(raw)
            .map_err(|errors| SessionError::InvalidField(errors.join("; ")))?;
        self.voting_mut(number)?.eliminated = eliminated;
        Ok(())
    }

    /// Attach a tie-break round to a voting; a third one is rejected.
    pub fn add_revote(
        &mut self,
        number: u8,
        candidates: Vec<u8>,
        votes: Vec<u32>,
    ) -> Result<(), SessionError> {
        if candidates.len() != votes.len() {
            return Err(SessionError::VotesMismatch {
                candidates: candidates.len(),
                votes: votes.len(),
            });
        }
        let voting = self.voting_mut(number)?;
        if voting.revotes.len() >= MAX_REVOTES {
            return Err(SessionError::TooManyRevotes);
        }
        voting.revotes.push(Revote { candidates, votes });
        Ok(())
    }

    /// Tie-break candidates for a completed voting.
    pub fn revote_candidates(&self, number: u8) -> Result<Vec<u8>, SessionError> {
        let voting = self
            .voting(number)
            .ok_or(SessionError::VotingNotFound(number))?;
        Ok(logic::find_revote_candidates(voting))
    }

    /// Seats still at the table, derived on demand.
    pub fn alive_seats(&self) -> Vec<&Seat> {
        logic::alive_seats(&self.seats, &self.votings, &self.shootings)
    }

    /// Re-derive `points`, `pu` and `is_first_killed` for every seat.
    ///
    /// No-op until roles are locked and a winner is chosen; idempotent, so
    /// callers may invoke it after any edit without bookkeeping.
    pub fn recompute_points(&mut self) {
        if !self.roles_locked {
            return;
        }
        let Some(winner) = self.winner_team else {
            return;
        };

        let first_killed = self.best_move.first_killed_slot;
        let best_move = if first_killed.is_some() && !self.best_move.numbers.trim().is_empty() {
            logic::calculate_best_move(&self.best_move.numbers, &self.seats, first_killed)
        } else {
            Default::default()
        };

        for seat in &mut self.seats {
            seat.is_first_killed = first_killed == Some(seat.slot);
            seat.pu = if seat.is_first_killed { best_move.pu } else { 0 };
        }
        // Points need the is_first_killed flag already in place.
        for seat in &mut self.seats {
            seat.points = logic::calculate_seat_points(seat, winner, &best_move);
        }
    }

    /// Freeze the session into an immutable stored game. Fails with the
    /// full list of protocol violations when incomplete.
    pub fn freeze(&self) -> Result<StoredGame, SessionError> {
        logic::validate_protocol(self).map_err(SessionError::NotReadyToSave)?;
        // validate_protocol guarantees date and winner are present.
        let game_date = self.date.ok_or_else(|| {
            SessionError::NotReadyToSave(vec!["Date is not set".to_string()])
        })?;
        let winner_team = self.winner_team.ok_or_else(|| {
            SessionError::NotReadyToSave(vec!["Winner team is not chosen".to_string()])
        })?;
        Ok(StoredGame::new(
            game_date,
            self.meta.clone(),
            winner_team,
            Protocol {
                seats: self.seats.clone(),
                votings: self.votings.clone(),
                shootings: self.shootings.clone(),
                best_move: self.best_move.clone(),
                notes: self.notes.clone(),
            },
        ))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
