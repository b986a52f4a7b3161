//! Per-seat point calculation.

use crate::constants::{LOSS_BONUS, WIN_BONUS};
use crate::models::{BestMoveResult, Seat, Team};

/// Round to 2 decimal places, half away from zero (fixed-point protocol rounding).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total points for one seat, as a pure function of its inputs.
///
/// Base point for being on the winning team, plus the best-move award
/// (first-killed seat only, and only when the guess scored), plus the
/// manual adjustments. Callers re-invoke this for every seat whenever
/// role, winner or best-move inputs change.
pub fn calculate_seat_points(seat: &Seat, winner_team: Team, best_move: &BestMoveResult) -> f64 {
    let mut points = if seat.team() == winner_team {
        WIN_BONUS
    } else {
        LOSS_BONUS
    };

    if best_move.applied && seat.is_first_killed {
        points += best_move.bonus;
    }

    points += seat.bonus_points;
    points -= seat.penalty_points;

    round2(points)
}
