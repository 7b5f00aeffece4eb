//! Core engine types: player ids, RNG, configuration, intents, errors.
//!
//! Everything here is independent of any particular room; the game
//! components and the room build on these.

pub mod config;
pub mod error;
pub mod intent;
pub mod player;
pub mod rng;

pub use config::RoomConfig;
pub use error::{GameError, Result};
pub use intent::{Intent, IntentRecord};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
