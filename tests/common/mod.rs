//! Shared helpers for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use mafia_protocol_web::{GameMeta, GameSession, Protocol, Role, Seat, StoredGame, Team, Voting};

/// The standard deal: Mafia at slots 1-2, Don at 3, Sheriff at 4, Civilians 5-10.
pub fn standard_roles(slot: u8) -> Role {
    match slot {
        1 | 2 => Role::Mafia,
        3 => Role::Don,
        4 => Role::Sheriff,
        _ => Role::Civilian,
    }
}

/// Ten filled seats with the standard deal.
pub fn seats_with_standard_roles() -> Vec<Seat> {
    (1..=10)
        .map(|slot| {
            let mut seat = Seat::new(slot);
            seat.nickname = format!("Player{slot}");
            seat.role = Some(standard_roles(slot));
            seat
        })
        .collect()
}

/// A session with 10 seated players, standard roles locked, and a date set.
pub fn ready_session() -> GameSession {
    let mut session = GameSession::new();
    session.set_date("2026-03-14").unwrap();
    for slot in 1..=10 {
        session.set_nickname(slot, &format!("Player{slot}")).unwrap();
        session.set_role(slot, Some(standard_roles(slot))).unwrap();
    }
    session.lock_roles().unwrap();
    session
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A stored game with the given seats (points already set on them).
pub fn stored_game(game_date: &str, winner: Team, seats: Vec<Seat>) -> StoredGame {
    StoredGame::new(
        date(game_date),
        GameMeta::default(),
        winner,
        Protocol {
            seats,
            votings: Vec::new(),
            shootings: Default::default(),
            best_move: Default::default(),
            notes: String::new(),
        },
    )
}

/// A voting with parallel candidates/votes, already numbered.
pub fn voting(number: u8, candidates: Vec<u8>, votes: Vec<u32>) -> Voting {
    let mut v = Voting::new(number);
    v.candidates = candidates;
    v.votes = votes;
    v
}
