//! Alive-set derivation: shootings, votings and disqualifications.

mod common;

use common::{seats_with_standard_roles, voting};
use mafia_protocol_web::logic::{alive_seats, eliminated_slots};
use mafia_protocol_web::{Night, Shot, ShootingRecord};

#[test]
fn everyone_alive_at_the_start() {
    let seats = seats_with_standard_roles();
    let alive = alive_seats(&seats, &[], &ShootingRecord::new());
    assert_eq!(alive.len(), 10);
}

#[test]
fn night_hits_leave_the_table() {
    let seats = seats_with_standard_roles();
    let mut shootings = ShootingRecord::new();
    shootings.set(Night::First, Shot::Hit(5));
    shootings.set(Night::Night(1), Shot::Hit(7));
    shootings.set(Night::Night(2), Shot::Miss);

    let alive = alive_seats(&seats, &[], &shootings);
    assert_eq!(alive.len(), 8);
    assert!(alive.iter().all(|s| s.slot != 5 && s.slot != 7));
}

#[test]
fn voted_out_players_leave_the_table() {
    let seats = seats_with_standard_roles();
    let mut v1 = voting(1, vec![2, 3], vec![6, 4]);
    v1.eliminated = vec![2];
    let mut v2 = voting(2, vec![3], vec![8]);
    v2.eliminated = vec![3];

    let alive = alive_seats(&seats, &[v1, v2], &ShootingRecord::new());
    assert_eq!(alive.len(), 8);
    assert!(alive.iter().all(|s| s.slot != 2 && s.slot != 3));
}

#[test]
fn four_tech_fouls_disqualify() {
    let mut seats = seats_with_standard_roles();
    seats[0].tech_fouls = 4;
    seats[1].tech_fouls = 3;

    let gone = eliminated_slots(&seats, &[], &ShootingRecord::new());
    assert!(gone.contains(&1));
    assert!(!gone.contains(&2));
}

#[test]
fn union_of_all_three_sources() {
    let mut seats = seats_with_standard_roles();
    seats[9].tech_fouls = 4;

    let mut shootings = ShootingRecord::new();
    shootings.set(Night::First, Shot::Hit(5));

    let mut v = voting(1, vec![1], vec![9]);
    v.eliminated = vec![1];

    let alive = alive_seats(&seats, &[v], &shootings);
    let slots: Vec<u8> = alive.iter().map(|s| s.slot).collect();
    assert_eq!(slots, vec![2, 3, 4, 6, 7, 8, 9]);
}

#[test]
fn insensitive_to_input_ordering() {
    let seats = seats_with_standard_roles();

    let mut v1 = voting(1, vec![2], vec![9]);
    v1.eliminated = vec![2];
    let mut v2 = voting(2, vec![6], vec![7]);
    v2.eliminated = vec![6];

    let forward = eliminated_slots(&seats, &[v1.clone(), v2.clone()], &ShootingRecord::new());
    let backward = eliminated_slots(&seats, &[v2, v1], &ShootingRecord::new());
    assert_eq!(forward, backward);
}

#[test]
fn double_elimination_counts_once() {
    let seats = seats_with_standard_roles();
    let mut shootings = ShootingRecord::new();
    shootings.set(Night::First, Shot::Hit(5));
    shootings.set(Night::Night(1), Shot::Hit(5));

    let gone = eliminated_slots(&seats, &[], &shootings);
    assert_eq!(gone.len(), 1);
}
