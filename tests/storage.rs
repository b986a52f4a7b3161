//! In-memory store: roster CRUD, stats accumulation, backup round-trip.

mod common;

use common::{date, seats_with_standard_roles, stored_game};
use mafia_protocol_web::{GameStore, MemoryStore, StoreError, Team};

#[test]
fn roster_is_ordered_and_unique() {
    let mut store = MemoryStore::new();
    store.add_player("Zoe").unwrap();
    store.add_player("Ann").unwrap();
    assert_eq!(
        store.add_player("Ann"),
        Err(StoreError::DuplicateNickname("Ann".to_string()))
    );

    let names: Vec<String> = store.get_players().into_iter().map(|p| p.nickname).collect();
    assert_eq!(names, vec!["Ann", "Zoe"]);
}

#[test]
fn rename_and_delete() {
    let mut store = MemoryStore::new();
    let ann = store.add_player("Ann").unwrap();
    let bob = store.add_player("Bob").unwrap();

    assert_eq!(
        store.rename_player(bob.id, "Ann"),
        Err(StoreError::DuplicateNickname("Ann".to_string()))
    );
    store.rename_player(bob.id, "Robert").unwrap();

    store.delete_player(ann.id).unwrap();
    assert!(matches!(
        store.delete_player(ann.id),
        Err(StoreError::PlayerNotFound(_))
    ));
    let names: Vec<String> = store.get_players().into_iter().map(|p| p.nickname).collect();
    assert_eq!(names, vec!["Robert"]);
}

#[test]
fn stats_accumulate_across_games() {
    let mut store = MemoryStore::new();
    store.add_player("Ann").unwrap();

    store.update_player_stats("Ann", true, 1.5, 0.5, 0.0).unwrap();
    store.update_player_stats("Ann", false, 0.25, 0.25, 0.25).unwrap();

    let ann = &store.get_players()[0];
    assert_eq!(ann.games_count, 2);
    assert_eq!(ann.wins_count, 1);
    assert_eq!(ann.total_points, 1.75);
    assert_eq!(ann.bonus_points, 0.75);
    assert_eq!(ann.penalty_points, 0.25);
    assert_eq!(ann.win_percentage(), 50.0);
}

#[test]
fn stats_for_unknown_player_fail() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        store.update_player_stats("Nobody", true, 1.0, 0.0, 0.0),
        Err(StoreError::PlayerNotFound(_))
    ));
}

#[test]
fn games_filter_by_date_and_sort_newest_first() {
    let mut store = MemoryStore::new();
    for d in ["2026-01-10", "2026-02-10", "2026-03-10"] {
        store
            .save_game(stored_game(d, Team::Mafia, seats_with_standard_roles()))
            .unwrap();
    }

    let all = store.get_games(None);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].game_date, date("2026-03-10"));

    let feb = store.get_games(Some((date("2026-02-01"), date("2026-02-28"))));
    assert_eq!(feb.len(), 1);
    assert_eq!(feb[0].game_date, date("2026-02-10"));
}

#[test]
fn backup_round_trip_preserves_everything() {
    let mut store = MemoryStore::new();
    store.add_player("Ann").unwrap();
    store.update_player_stats("Ann", true, 1.0, 0.0, 0.0).unwrap();
    store
        .save_game(stored_game("2026-04-01", Team::Civilians, seats_with_standard_roles()))
        .unwrap();

    let backup = store.export_all();
    let json = serde_json::to_string(&backup).unwrap();
    let parsed: mafia_protocol_web::Backup = serde_json::from_str(&json).unwrap();

    let mut restored = MemoryStore::new();
    restored.import_all(parsed).unwrap();
    assert_eq!(restored.get_players(), store.get_players());
    assert_eq!(restored.get_games(None), store.get_games(None));
}
