//! Period rating: fold stored games over a date range into standings.

use crate::logic::scoring::round2;
use crate::models::{RatingRow, StoredGame};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Build the standings table for games dated within `[start, end]` inclusive.
///
/// Per player: games, wins, summed points and adjustments, win percentage
/// (2 decimals, 0 without games). Sorted by total points, then bonus
/// points, then wins, all descending (stable otherwise). Places are
/// strictly sequential 1..N; exact ties still get distinct places, which
/// matches the original protocol tool.
pub fn calculate_rating(games: &[StoredGame], start: NaiveDate, end: NaiveDate) -> Vec<RatingRow> {
    let mut stats: HashMap<String, RatingRow> = HashMap::new();
    // Keep first-seen order for a stable sort over hash-map contents.
    let mut order: Vec<String> = Vec::new();

    for game in games {
        if game.game_date < start || game.game_date > end {
            continue;
        }
        for seat in &game.protocol.seats {
            if !seat.is_filled() {
                continue;
            }
            let row = stats.entry(seat.nickname.clone()).or_insert_with(|| {
                order.push(seat.nickname.clone());
                RatingRow {
                    nickname: seat.nickname.clone(),
                    games: 0,
                    wins: 0,
                    win_percentage: 0.0,
                    total_points: 0.0,
                    bonus_points: 0.0,
                    penalty_points: 0.0,
                    place: 0,
                }
            });

            row.games += 1;
            if seat.team() == game.winner_team {
                row.wins += 1;
            }
            row.total_points += seat.points;
            row.bonus_points += seat.bonus_points;
            row.penalty_points += seat.penalty_points;
        }
    }

    let mut rating: Vec<RatingRow> = order
        .into_iter()
        .filter_map(|nickname| stats.remove(&nickname))
        .map(|mut row| {
            if row.games > 0 {
                row.win_percentage = round2(row.wins as f64 / row.games as f64 * 100.0);
            }
            row.total_points = round2(row.total_points);
            row.bonus_points = round2(row.bonus_points);
            row.penalty_points = round2(row.penalty_points);
            row
        })
        .collect();

    rating.sort_by(|a, b| {
        b.total_points
            .partial_cmp(&a.total_points)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                b.bonus_points
                    .partial_cmp(&a.bonus_points)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then(b.wins.cmp(&a.wins))
    });

    for (index, row) in rating.iter_mut().enumerate() {
        row.place = index as u32 + 1;
    }

    rating
}
