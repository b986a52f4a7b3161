//! Data structures for the mafia protocol: seats, votings, shootings, sessions.

mod game;
mod player;
mod session;
mod stored;

pub use game::{BestMove, BestMoveResult, Night, Revote, ShootingEntry, ShootingRecord, Shot, Voting};
pub use player::{PlayerId, PlayerIdentity, RatingRow, Role, Seat, Team};
pub use session::{GameMeta, GameSession, SessionError, SessionId};
pub use stored::{GameId, Protocol, StoredGame};
