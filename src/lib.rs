//! # hidden-ballot
//!
//! A room-based engine for a hidden-role social deduction game.
//!
//! Players gather in a room, are secretly dealt roles, then elect
//! governments that enact policies from a shared deck. Protagonists win on
//! traditional policies or by expelling the Leader; antagonists win on
//! radical policies or by electing the Leader late in the game.
//!
//! ## Design Principles
//!
//! 1. **Transport-Agnostic**: The engine consumes `Intent`s and returns
//!    `Outcome`s. It never touches a socket; delivery, pacing and retries
//!    belong to the caller.
//!
//! 2. **Explicit Phases**: Every room is in exactly one `Phase`, and each
//!    phase carries only the data that phase needs.
//!
//! 3. **Reject Without Side Effects**: An illegal intent returns a
//!    `GameError` and leaves the room as it was.
//!
//! 4. **Deterministic**: A room seeded the same way and fed the same intents
//!    produces the same game.
//!
//! ## Modules
//!
//! - `core`: Player IDs, intents, configuration, errors, RNG
//! - `deck`: Policy cards, draw and discard piles
//! - `roster`: Seats, roles and role reveals
//! - `rotation`: Presidential rotation
//! - `election`: Nomination rules, term limits and ballots
//! - `legislature`: Legislative session checks and veto
//! - `powers`: Executive powers
//! - `rules`: Win conditions
//! - `events`: Public and private events, outcomes
//! - `room`: The per-room state machine and the registry
//! - `sim`: Bot playouts for simulation and testing

pub mod core;
pub mod deck;
pub mod election;
pub mod events;
pub mod legislature;
pub mod powers;
pub mod room;
pub mod roster;
pub mod rotation;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, Intent, IntentRecord, PlayerId, Result, RoomConfig};

pub use crate::deck::{Deck, Policy, PolicyHand, PolicyTally};

pub use crate::roster::{Alignment, Player, PlayerView, Role, RoleReveal, Roster};

pub use crate::election::{Election, Tally, TermLimits};

pub use crate::legislature::{Government, VetoStatus};

pub use crate::powers::{Power, PowerUse};

pub use crate::rules::{GameResult, WinEvaluator};

pub use crate::events::{Delivery, GameEvent, Outcome, PrivateEvent};

pub use crate::room::{Phase, Room, RoomCode, RoomRegistry};
pub use crate::sim::{play_out, play_out_in_registry, BotPolicy, Playout, RandomBot};
