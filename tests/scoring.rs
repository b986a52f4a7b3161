//! Per-seat point calculation.

mod common;

use common::seats_with_standard_roles;
use mafia_protocol_web::{calculate_seat_points, BestMoveResult, Role, Seat, Team};

fn civilian_seat() -> Seat {
    let mut seat = Seat::new(5);
    seat.nickname = "Player5".to_string();
    seat.role = Some(Role::Civilian);
    seat
}

#[test]
fn worked_example_from_the_rules() {
    // Civilian, civilians won, +0.5 bonus, -0.2 penalty, not first killed.
    let mut seat = civilian_seat();
    seat.bonus_points = 0.5;
    seat.penalty_points = 0.2;
    let points = calculate_seat_points(&seat, Team::Civilians, &BestMoveResult::default());
    assert_eq!(points, 1.30);
}

#[test]
fn winning_team_gets_the_base_point() {
    let seat = civilian_seat();
    assert_eq!(
        calculate_seat_points(&seat, Team::Civilians, &BestMoveResult::default()),
        1.0
    );
    assert_eq!(
        calculate_seat_points(&seat, Team::Mafia, &BestMoveResult::default()),
        0.0
    );
}

#[test]
fn don_counts_as_mafia_team() {
    let mut seat = Seat::new(3);
    seat.role = Some(Role::Don);
    assert_eq!(
        calculate_seat_points(&seat, Team::Mafia, &BestMoveResult::default()),
        1.0
    );
}

#[test]
fn best_move_bonus_only_for_the_first_killed() {
    let best = BestMoveResult {
        bonus: 0.8,
        pu: 3,
        applied: true,
    };
    let mut seat = civilian_seat();
    assert_eq!(calculate_seat_points(&seat, Team::Civilians, &best), 1.0);

    seat.is_first_killed = true;
    assert_eq!(calculate_seat_points(&seat, Team::Civilians, &best), 1.8);
}

#[test]
fn unapplied_best_move_changes_nothing() {
    let best = BestMoveResult {
        bonus: 0.0,
        pu: 0,
        applied: false,
    };
    let mut seat = civilian_seat();
    seat.is_first_killed = true;
    assert_eq!(calculate_seat_points(&seat, Team::Civilians, &best), 1.0);
}

#[test]
fn monotonic_in_bonus_and_anti_monotonic_in_penalty() {
    let base = civilian_seat();
    let mut prev = calculate_seat_points(&base, Team::Civilians, &BestMoveResult::default());
    for step in 1..=5 {
        let mut seat = base.clone();
        seat.bonus_points = step as f64 * 0.1;
        let points = calculate_seat_points(&seat, Team::Civilians, &BestMoveResult::default());
        assert!(points > prev);
        prev = points;
    }

    let mut prev = calculate_seat_points(&base, Team::Civilians, &BestMoveResult::default());
    for step in 1..=5 {
        let mut seat = base.clone();
        seat.penalty_points = step as f64 * 0.1;
        let points = calculate_seat_points(&seat, Team::Civilians, &BestMoveResult::default());
        assert!(points < prev);
        prev = points;
    }
}

#[test]
fn points_round_to_two_decimals() {
    let mut seat = civilian_seat();
    seat.bonus_points = 0.111;
    seat.penalty_points = 0.0;
    assert_eq!(
        calculate_seat_points(&seat, Team::Civilians, &BestMoveResult::default()),
        1.11
    );
    seat.bonus_points = 0.0;
    seat.penalty_points = 0.333;
    assert_eq!(
        calculate_seat_points(&seat, Team::Civilians, &BestMoveResult::default()),
        0.67
    );
}

#[test]
fn recomputation_is_idempotent() {
    let seats = seats_with_standard_roles();
    let best = BestMoveResult::default();
    for seat in &seats {
        let once = calculate_seat_points(seat, Team::Mafia, &best);
        let twice = calculate_seat_points(seat, Team::Mafia, &best);
        assert_eq!(once, twice);
    }
}
