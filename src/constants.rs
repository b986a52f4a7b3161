//! Fixed game constants: table size, round limits, best-move bonus table.

/// Seats at the table; slots are numbered 1..=10.
pub const MAX_PLAYERS: u8 = 10;

/// Day votings per game.
pub const MAX_VOTINGS: u8 = 6;

/// Night shots per game (plus the separate "first shot" entry).
pub const MAX_NIGHTS: u8 = 6;

/// Nested revote rounds allowed per voting.
pub const MAX_REVOTES: usize = 2;

/// Technical fouls that disqualify a player.
pub const TECH_FOULS_LIMIT: u8 = 4;

/// Judge shorthand for a night shot that found no target.
/// Both Latin and Cyrillic variants occur in real protocols.
pub const MISS_SYMBOLS: [&str; 8] = ["*", "х", "П", "пр", "Х", "x", "X", "?"];

/// Best-move award for guessing 1, 2 or 3 of the black slots.
pub const BEST_MOVE_BONUS_ONE: f64 = 0.25;
pub const BEST_MOVE_BONUS_TWO: f64 = 0.5;
pub const BEST_MOVE_BONUS_THREE: f64 = 0.8;

/// Base points for being on the winning / losing team.
pub const WIN_BONUS: f64 = 1.0;
pub const LOSS_BONUS: f64 = 0.0;

/// Nickname length bounds (trimmed).
pub const NICKNAME_MIN_LEN: usize = 2;
pub const NICKNAME_MAX_LEN: usize = 50;

/// Is the raw shooting token a miss marker? Matched case-insensitively.
pub fn is_miss_symbol(token: &str) -> bool {
    let lowered = token.to_lowercase();
    MISS_SYMBOLS.iter().any(|s| s.to_lowercase() == lowered)
}
