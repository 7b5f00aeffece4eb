//! Power dispatcher: maps the radical board to one-shot presidential powers.

pub mod dispatcher;

pub use dispatcher::{check_target, power_for, targets, PendingPower, Power, PowerUse, PEEK_SIZE};
