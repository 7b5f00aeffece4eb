//! Win evaluation.
//!
//! The room consults `WinEvaluator` after every enactment and expulsion, and
//! once more when an election passes, before the legislative session opens.

pub mod win;

pub use win::{GameResult, WinEvaluator};
