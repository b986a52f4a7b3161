//! Vote tally checks and tie-break (revote) resolution.

use crate::models::Voting;

/// The total of recorded votes can never exceed the number of players
/// still at the table.
pub fn validate_voting(voting: &Voting, alive_count: usize) -> Result<(), String> {
    let total: u32 = voting.votes.iter().sum();
    if total as usize > alive_count {
        return Err(format!(
            "More votes ({total}) than alive players ({alive_count})"
        ));
    }
    Ok(())
}

/// Candidates tied at the maximum vote count, in ballot order.
///
/// Empty when no votes were cast or when a single candidate strictly
/// leads: a revote needs at least two tied leaders.
pub fn find_revote_candidates(voting: &Voting) -> Vec<u8> {
    let max_votes = match voting.votes.iter().max() {
        Some(&m) if m > 0 => m,
        _ => return Vec::new(),
    };

    let tied: Vec<u8> = voting
        .candidates
        .iter()
        .zip(&voting.votes)
        .filter(|(_, &v)| v == max_votes)
        .map(|(&c, _)| c)
        .collect();

    if tied.len() > 1 {
        tied
    } else {
        Vec::new()
    }
}
