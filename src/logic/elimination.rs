//! Alive-set derivation from disqualifications, night shots and votings.

use crate::models::{Seat, ShootingRecord, Voting};
use std::collections::HashSet;

/// Every slot that has left the table: disqualified (4 technical fouls),
/// shot at night, or voted out. Order insensitive.
pub fn eliminated_slots(
    seats: &[Seat],
    votings: &[Voting],
    shootings: &ShootingRecord,
) -> HashSet<u8> {
    let mut eliminated = HashSet::new();

    for seat in seats {
        if seat.is_disqualified() {
            eliminated.insert(seat.slot);
        }
    }

    for slot in shootings.hit_slots() {
        eliminated.insert(slot);
    }

    for voting in votings {
        for &slot in &voting.eliminated {
            eliminated.insert(slot);
        }
    }

    eliminated
}

/// Seats still at the table. Recomputed on demand, never cached.
pub fn alive_seats<'a>(
    seats: &'a [Seat],
    votings: &[Voting],
    shootings: &ShootingRecord,
) -> Vec<&'a Seat> {
    let gone = eliminated_slots(seats, votings, shootings);
    seats.iter().filter(|s| !gone.contains(&s.slot)).collect()
}
