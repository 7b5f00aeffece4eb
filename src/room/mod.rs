//! Rooms: the per-game state machine and the registry that routes to it.

pub mod code;
pub mod phase;
pub mod registry;
#[allow(clippy::module_inception)]
pub mod room;

pub use code::{RoomCode, CODE_LEN};
pub use phase::Phase;
pub use registry::RoomRegistry;
pub use room::Room;
