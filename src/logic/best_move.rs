//! Best-move evaluation: scoring the first-killed player's guess list.

use crate::constants::{BEST_MOVE_BONUS_ONE, BEST_MOVE_BONUS_THREE, BEST_MOVE_BONUS_TWO, MAX_PLAYERS};
use crate::models::{BestMoveResult, Seat};

/// Score a guess list against the actual black slots.
///
/// Only a red-team first kill is scoreable: if the first-killed seat is
/// unresolved, has no role, or is black, the result is zero/not-applied.
/// Tokens outside 1..=10 are discarded rather than rejected; the judge
/// already validated the field, this is the scoring path.
pub fn calculate_best_move(
    guess_raw: &str,
    seats: &[Seat],
    first_killed_slot: Option<u8>,
) -> BestMoveResult {
    let result = BestMoveResult::default();

    let first_killed = first_killed_slot.and_then(|slot| seats.iter().find(|s| s.slot == slot));
    let role = match first_killed.and_then(|s| s.role) {
        Some(role) => role,
        None => return result,
    };
    if role.is_black() {
        return result;
    }

    let mut guessed: Vec<u8> = Vec::new();
    for token in guess_raw.split(',').map(str::trim) {
        if let Ok(n) = token.parse::<u8>() {
            if (1..=MAX_PLAYERS).contains(&n) && !guessed.contains(&n) {
                guessed.push(n);
            }
        }
    }
    if guessed.is_empty() {
        return result;
    }

    let black_slots: Vec<u8> = seats
        .iter()
        .filter(|s| s.role.is_some_and(|r| r.is_black()))
        .map(|s| s.slot)
        .collect();
    let correct = guessed.iter().filter(|n| black_slots.contains(n)).count();

    let (bonus, pu) = match correct {
        1 => (BEST_MOVE_BONUS_ONE, 1),
        2 => (BEST_MOVE_BONUS_TWO, 2),
        3 => (BEST_MOVE_BONUS_THREE, 3),
        _ => (0.0, 0),
    };

    BestMoveResult {
        bonus,
        pu,
        applied: bonus > 0.0,
    }
}
