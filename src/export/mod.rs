//! Rendering of scoring output for download. Consumes the aggregator's
//! rows verbatim and never recomputes them.

use crate::models::RatingRow;

/// Render a standings table as CSV (header + one row per player).
pub fn rating_to_csv(rows: &[RatingRow]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "place",
        "nickname",
        "games",
        "wins",
        "win_percentage",
        "total_points",
        "bonus_points",
        "penalty_points",
    ])?;
    for row in rows {
        writer.write_record([
            row.place.to_string(),
            row.nickname.clone(),
            row.games.to_string(),
            row.wins.to_string(),
            format!("{:.2}", row.win_percentage),
            format!("{:.2}", row.total_points),
            format!("{:.2}", row.bonus_points),
            format!("{:.2}", row.penalty_points),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes).unwrap_or_default())
}
