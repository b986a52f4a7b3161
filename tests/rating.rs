//! Period rating: filtering, accumulation, sorting and places.

mod common;

use common::{date, stored_game};
use mafia_protocol_web::{calculate_rating, Role, Seat, StoredGame, Team};

fn seat(slot: u8, nickname: &str, role: Role, points: f64) -> Seat {
    let mut s = Seat::new(slot);
    s.nickname = nickname.to_string();
    s.role = Some(role);
    s.points = points;
    s
}

fn one_game(game_date: &str, winner: Team, seats: Vec<Seat>) -> StoredGame {
    stored_game(game_date, winner, seats)
}

#[test]
fn date_range_is_inclusive() {
    let games = vec![
        one_game("2026-01-01", Team::Civilians, vec![seat(1, "Ann", Role::Civilian, 1.0)]),
        one_game("2026-01-15", Team::Civilians, vec![seat(1, "Ann", Role::Civilian, 1.0)]),
        one_game("2026-01-31", Team::Civilians, vec![seat(1, "Ann", Role::Civilian, 1.0)]),
        one_game("2026-02-01", Team::Civilians, vec![seat(1, "Ann", Role::Civilian, 1.0)]),
    ];
    let rating = calculate_rating(&games, date("2026-01-01"), date("2026-01-31"));
    assert_eq!(rating.len(), 1);
    assert_eq!(rating[0].games, 3);
}

#[test]
fn accumulates_games_wins_and_points() {
    let games = vec![
        one_game(
            "2026-03-01",
            Team::Civilians,
            vec![
                seat(1, "Ann", Role::Civilian, 1.5),
                seat(2, "Bob", Role::Mafia, 0.0),
            ],
        ),
        one_game(
            "2026-03-02",
            Team::Mafia,
            vec![
                seat(1, "Ann", Role::Civilian, 0.2),
                seat(2, "Bob", Role::Mafia, 1.0),
            ],
        ),
    ];
    let rating = calculate_rating(&games, date("2026-03-01"), date("2026-03-31"));

    let ann = rating.iter().find(|r| r.nickname == "Ann").unwrap();
    assert_eq!(ann.games, 2);
    assert_eq!(ann.wins, 1);
    assert_eq!(ann.total_points, 1.7);
    assert_eq!(ann.win_percentage, 50.0);

    let bob = rating.iter().find(|r| r.nickname == "Bob").unwrap();
    assert_eq!(bob.games, 2);
    assert_eq!(bob.wins, 1);
    assert_eq!(bob.total_points, 1.0);
}

#[test]
fn sorted_by_points_then_bonus_then_wins() {
    let mut high_bonus = seat(1, "Bonus", Role::Civilian, 1.0);
    high_bonus.bonus_points = 0.5;
    let plain = seat(2, "Plain", Role::Civilian, 1.0);
    let mut top = seat(3, "Top", Role::Civilian, 1.6);
    top.bonus_points = 0.0;

    let games = vec![one_game(
        "2026-04-01",
        Team::Civilians,
        vec![top, high_bonus, plain],
    )];
    let rating = calculate_rating(&games, date("2026-04-01"), date("2026-04-01"));

    let names: Vec<&str> = rating.iter().map(|r| r.nickname.as_str()).collect();
    assert_eq!(names, vec!["Top", "Bonus", "Plain"]);
}

#[test]
fn exact_ties_still_get_distinct_sequential_places() {
    // Known quirk of the original tool: ties are not shared.
    let games = vec![one_game(
        "2026-05-01",
        Team::Civilians,
        vec![
            seat(1, "Ann", Role::Civilian, 1.0),
            seat(2, "Bob", Role::Civilian, 1.0),
            seat(3, "Cat", Role::Civilian, 1.0),
        ],
    )];
    let rating = calculate_rating(&games, date("2026-05-01"), date("2026-05-01"));
    let places: Vec<u32> = rating.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 2, 3]);
}

#[test]
fn empty_range_yields_empty_standings() {
    let games = vec![one_game(
        "2026-06-01",
        Team::Mafia,
        vec![seat(1, "Ann", Role::Civilian, 0.0)],
    )];
    let rating = calculate_rating(&games, date("2026-07-01"), date("2026-07-31"));
    assert!(rating.is_empty());
}

#[test]
fn unfilled_seats_are_skipped() {
    let empty = Seat::new(4);
    let games = vec![one_game(
        "2026-06-01",
        Team::Mafia,
        vec![seat(1, "Ann", Role::Don, 1.0), empty],
    )];
    let rating = calculate_rating(&games, date("2026-06-01"), date("2026-06-01"));
    assert_eq!(rating.len(), 1);
    assert_eq!(rating[0].place, 1);
}

#[test]
fn win_percentage_rounds_to_two_decimals() {
    let games = vec![
        one_game("2026-08-01", Team::Civilians, vec![seat(1, "Ann", Role::Civilian, 1.0)]),
        one_game("2026-08-02", Team::Mafia, vec![seat(1, "Ann", Role::Civilian, 0.0)]),
        one_game("2026-08-03", Team::Mafia, vec![seat(1, "Ann", Role::Civilian, 0.0)]),
    ];
    let rating = calculate_rating(&games, date("2026-08-01"), date("2026-08-31"));
    assert_eq!(rating[0].win_percentage, 33.33);
}
