//! Role composition checks and the auto-fill convenience.

use crate::constants::MAX_PLAYERS;
use crate::models::{Role, Seat};

/// Role counts over the 10 seats.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct RoleCounts {
    mafia: usize,
    don: usize,
    sheriff: usize,
    civilian: usize,
}

impl RoleCounts {
    fn of(seats: &[Seat]) -> Self {
        let mut counts = Self::default();
        for seat in seats {
            match seat.role {
                Some(Role::Mafia) => counts.mafia += 1,
                Some(Role::Don) => counts.don += 1,
                Some(Role::Sheriff) => counts.sheriff += 1,
                Some(Role::Civilian) => counts.civilian += 1,
                None => {}
            }
        }
        counts
    }

    fn assigned(&self) -> usize {
        self.mafia + self.don + self.sheriff + self.civilian
    }
}

/// The fixed composition: 2 Mafia, 1 Don, 1 Sheriff, 6 Civilians, all
/// 10 seats assigned. One message per violated count.
pub fn validate_roles(seats: &[Seat]) -> Result<(), Vec<String>> {
    let counts = RoleCounts::of(seats);
    let mut errors = Vec::new();

    if counts.mafia != 2 {
        errors.push(format!("There must be exactly 2 Mafia (currently: {})", counts.mafia));
    }
    if counts.don != 1 {
        errors.push(format!("There must be exactly 1 Don (currently: {})", counts.don));
    }
    if counts.sheriff != 1 {
        errors.push(format!("There must be exactly 1 Sheriff (currently: {})", counts.sheriff));
    }
    if counts.civilian != 6 {
        errors.push(format!("There must be exactly 6 Civilians (currently: {})", counts.civilian));
    }
    if counts.assigned() != MAX_PLAYERS as usize {
        errors.push(format!(
            "Not all roles are assigned ({}/{MAX_PLAYERS})",
            counts.assigned()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Once the 3 black roles and the Sheriff are dealt, every remaining seat
/// is a Civilian. A suggestion, not a validation: never overwrites an
/// explicit choice, and a second application changes nothing.
pub fn auto_fill_roles(seats: &mut [Seat]) {
    let counts = RoleCounts::of(seats);
    if counts.mafia + counts.don != 3 || counts.sheriff != 1 {
        return;
    }
    for seat in seats.iter_mut() {
        if seat.role.is_none() {
            seat.role = Some(Role::Civilian);
        }
    }
}
