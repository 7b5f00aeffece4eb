//! Roster: seated players, hidden roles, role assignment.

pub mod player;
pub mod seating;

pub use player::{Alignment, Player, PlayerView, Role};
pub use seating::{infiltrator_count, Departure, RoleReveal, Roster, Teammate, MAX_NAME_LEN};
