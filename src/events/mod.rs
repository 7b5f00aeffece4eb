//! Produced events: what an intent handler returns instead of broadcasting.

pub mod event;
pub mod outcome;

pub use event::{Delivery, GameEvent, PrivateEvent};
pub use outcome::Outcome;
