//! Field-level input validation: pure functions over raw judge input.
//!
//! Single-field checks return `Result<payload, String>` with a human-readable
//! message; list checks collect every violation instead of failing fast.

use crate::constants::{is_miss_symbol, MAX_PLAYERS, NICKNAME_MAX_LEN, NICKNAME_MIN_LEN, TECH_FOULS_LIMIT};
use crate::models::{GameSession, Seat};
use chrono::NaiveDate;

/// A parsed shooting cell: empty, a miss marker, or a target slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShootingInput {
    Empty,
    Miss,
    Slot(u8),
}

/// Player number must be an integer in 1..=10.
pub fn validate_player_number(raw: &str) -> Result<u8, String> {
    match raw.trim().parse::<u8>() {
        Ok(n) if (1..=MAX_PLAYERS).contains(&n) => Ok(n),
        _ => Err(format!("Player number must be between 1 and {MAX_PLAYERS}")),
    }
}

/// A shooting cell holds nothing, a miss marker, or a slot number.
pub fn validate_shooting(raw: &str) -> Result<ShootingInput, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ShootingInput::Empty);
    }
    if is_miss_symbol(trimmed) {
        return Ok(ShootingInput::Miss);
    }
    match trimmed.parse::<u8>() {
        Ok(n) if (1..=MAX_PLAYERS).contains(&n) => Ok(ShootingInput::Slot(n)),
        _ => Err(format!(
            "Shooting: enter a slot number (1-{MAX_PLAYERS}) or a miss marker ({})",
            crate::constants::MISS_SYMBOLS.join(", ")
        )),
    }
}

/// Comma-separated slot list (best move guesses, voting candidates).
/// Collects every out-of-range token and every duplicate, not just the first.
pub fn validate_numbers_list(raw: &str) -> Result<Vec<u8>, Vec<String>> {
    let mut errors = Vec::new();
    let mut numbers = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<u8>() {
            Ok(n) if (1..=MAX_PLAYERS).contains(&n) => numbers.push(n),
            _ => errors.push(format!("\"{token}\" is not a valid slot (allowed 1-{MAX_PLAYERS})")),
        }
    }

    let mut duplicates: Vec<u8> = Vec::new();
    for (i, n) in numbers.iter().enumerate() {
        if numbers[..i].contains(n) && !duplicates.contains(n) {
            duplicates.push(*n);
        }
    }
    if !duplicates.is_empty() {
        let list: Vec<String> = duplicates.iter().map(u8::to_string).collect();
        errors.push(format!("Duplicate slots: {}", list.join(", ")));
    }

    if errors.is_empty() {
        Ok(numbers)
    } else {
        Err(errors)
    }
}

/// Technical foul count is 0..=4; 4 means disqualification.
pub fn validate_tech_fouls(count: u8) -> Result<u8, String> {
    if count > TECH_FOULS_LIMIT {
        return Err(format!("Technical fouls must be between 0 and {TECH_FOULS_LIMIT}"));
    }
    Ok(count)
}

/// Manual point adjustment: decimal with either comma or dot separator,
/// parsed once at the boundary. Empty input means zero.
pub fn validate_adjustment(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(n) if n >= 0.0 => Ok(n),
        Ok(_) => Err("Adjustment must not be negative".to_string()),
        Err(_) => Err("Invalid number format (use dot or comma)".to_string()),
    }
}

/// Game date in ISO format (YYYY-MM-DD).
pub fn validate_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Date is not set".to_string());
    }
    trimmed
        .parse::<NaiveDate>()
        .map_err(|_| "Invalid date format (expected YYYY-MM-DD)".to_string())
}

/// Nickname: trimmed length in 2..=50.
pub fn validate_nickname(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Nickname must not be empty".to_string());
    }
    if trimmed.chars().count() < NICKNAME_MIN_LEN {
        return Err(format!("Nickname must be at least {NICKNAME_MIN_LEN} characters"));
    }
    if trimmed.chars().count() > NICKNAME_MAX_LEN {
        return Err(format!("Nickname must be at most {NICKNAME_MAX_LEN} characters"));
    }
    Ok(trimmed.to_string())
}

/// No two filled seats may hold the same nickname.
pub fn validate_unique_nicknames(seats: &[Seat]) -> Result<(), String> {
    let filled: Vec<&str> = seats
        .iter()
        .filter(|s| s.is_filled())
        .map(|s| s.nickname.as_str())
        .collect();
    let mut duplicates: Vec<&str> = Vec::new();
    for (i, name) in filled.iter().enumerate() {
        if filled[..i].contains(name) && !duplicates.contains(name) {
            duplicates.push(name);
        }
    }
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(format!("Duplicate players: {}", duplicates.join(", ")))
    }
}

/// Aggregate gate before saving a protocol. Returns every violated
/// condition so the judge sees all problems at once.
pub fn validate_protocol(session: &GameSession) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if session.date.is_none() {
        errors.push("Date is not set".to_string());
    }

    let filled = session.seats.iter().filter(|s| s.is_filled()).count();
    if filled != MAX_PLAYERS as usize {
        errors.push(format!("Not all seats are filled ({filled}/{MAX_PLAYERS})"));
    }

    if let Err(e) = validate_unique_nicknames(&session.seats) {
        errors.push(e);
    }

    let assigned = session.seats.iter().filter(|s| s.role.is_some()).count();
    if assigned != MAX_PLAYERS as usize {
        errors.push(format!("Not all roles are assigned ({assigned}/{MAX_PLAYERS})"));
    }

    // Points are only recomputed after the lock, so an unlocked protocol
    // would freeze with stale zeros.
    if !session.roles_locked {
        errors.push("Roles are not locked".to_string());
    }

    if session.winner_team.is_none() {
        errors.push("Winner team is not chosen".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-blocking warnings shown to the judge before saving.
pub fn collect_warnings(session: &GameSession, alive_count: usize) -> Vec<String> {
    let mut warnings = Vec::new();

    let empty_votings = session.votings.iter().filter(|v| v.is_empty()).count();
    if empty_votings > 0 {
        warnings.push(format!("{empty_votings} voting(s) not filled in"));
    }

    let empty_shots = session
        .shootings
        .entries
        .iter()
        .filter(|e| e.shot == crate::models::Shot::Empty)
        .count();
    if empty_shots > 0 && alive_count < 5 {
        warnings.push(format!(
            "{empty_shots} night shot(s) not filled in (game is close to finished)"
        ));
    }

    warnings
}
