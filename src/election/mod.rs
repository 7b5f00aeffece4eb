//! Election: nomination, term limits, voting and the majority tally.

pub mod ballot;

pub use ballot::{nominable, validate_nomination, Election, Tally, TermLimits, PRESIDENT_TERM_LIMIT_MIN_LIVING};
