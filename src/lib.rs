//! Sport Mafia scorekeeping: library with models, game logic and storage.

pub mod constants;
pub mod export;
pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    alive_seats, auto_fill_roles, calculate_best_move, calculate_rating, calculate_seat_points,
    find_revote_candidates, validate_protocol, validate_roles, validate_voting,
};
pub use models::{
    BestMove, BestMoveResult, GameMeta, GameSession, Night, PlayerId, PlayerIdentity, Protocol,
    RatingRow, Role, Seat, SessionError, SessionId, ShootingRecord, Shot, StoredGame, Team, Voting,
};
pub use storage::{Backup, GameStore, MemoryStore, StoreError};
