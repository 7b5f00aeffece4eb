//! Turn rotation: who holds the presidency next.

pub mod turn;

pub use turn::{next_president, Rotation};
