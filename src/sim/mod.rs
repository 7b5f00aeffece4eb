//! Headless playouts.
//!
//! Drives a room to completion with bot policies picking from
//! `Room::legal_intents`. Used by the `simulate` binary, the benchmark and
//! randomized tests.

pub mod playout;

pub use playout::{play_out, play_out_in_registry, seat_bots, BotPolicy, Playout, RandomBot};
