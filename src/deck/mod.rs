//! Policy deck: card types, draw and discard piles, reshuffling.

pub mod pile;
pub mod policy;

pub use pile::{Deck, Draw};
pub use policy::{same_cards, Policy, PolicyHand, PolicyTally};
