//! Game logic: validation, role checks, eliminations, votings, scoring, rating.

mod best_move;
mod elimination;
mod rating;
mod roles;
mod scoring;
mod validation;
mod voting;

pub use best_move::calculate_best_move;
pub use elimination::{alive_seats, eliminated_slots};
pub use rating::calculate_rating;
pub use roles::{auto_fill_roles, validate_roles};
pub use scoring::{calculate_seat_points, round2};
pub use validation::{
    collect_warnings, validate_adjustment, validate_date, validate_nickname,
    validate_numbers_list, validate_player_number, validate_protocol, validate_shooting,
    validate_tech_fouls, validate_unique_nicknames, ShootingInput,
};
pub use voting::{find_revote_candidates, validate_voting};
