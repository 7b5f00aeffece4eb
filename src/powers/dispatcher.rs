//! Presidential powers unlocked by radical enactments.
//!
//! | radical count | eligible players | power       |
//! |---------------|------------------|-------------|
//! | 1             | ≥ 9              | Investigate |
//! | 2             | ≥ 7              | Investigate |
//! | 3             | any              | Peek        |
//! | 4, 5          | any              | Expel       |
//!
//! Only consulted after a radical policy is enacted by an elected
//! government; forced enactments grant nothing.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result};
use crate::roster::Roster;

/// Cards shown by a peek.
pub const PEEK_SIZE: usize = 3;

/// A one-shot presidential power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Power {
    /// Learn one player's alignment.
    Investigate,
    /// See the top of the draw pile.
    Peek,
    /// Remove a player from the game.
    Expel,
}

impl Power {
    /// Whether the president must send an explicit resume after using it.
    #[must_use]
    pub fn needs_resume(self) -> bool {
        matches!(self, Power::Peek | Power::Expel)
    }
}

/// Power granted for a board of `radical` policies with `living` eligible players.
#[must_use]
pub fn power_for(radical: u8, living: usize) -> Option<Power> {
    match (radical, living) {
        (1, n) if n >= 9 => Some(Power::Investigate),
        (2, n) if n >= 7 => Some(Power::Investigate),
        (3, _) => Some(Power::Peek),
        (4 | 5, _) => Some(Power::Expel),
        _ => None,
    }
}

/// A granted power awaiting use, or used and awaiting the resume signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPower {
    pub power: Power,
    pub used: bool,
}

impl PendingPower {
    #[must_use]
    pub fn new(power: Power) -> Self {
        Self { power, used: false }
    }
}

/// Payload of a use-power intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "power", rename_all = "snake_case")]
pub enum PowerUse {
    Investigate { target: PlayerId },
    Expel { target: PlayerId },
    Peek,
}

impl PowerUse {
    #[must_use]
    pub fn power(&self) -> Power {
        match self {
            PowerUse::Investigate { .. } => Power::Investigate,
            PowerUse::Expel { .. } => Power::Expel,
            PowerUse::Peek => Power::Peek,
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        match *self {
            PowerUse::Investigate { target } | PowerUse::Expel { target } => Some(target),
            PowerUse::Peek => None,
        }
    }
}

/// Targets must be another eligible player.
pub fn check_target(roster: &Roster, president: PlayerId, target: PlayerId) -> Result<()> {
    match roster.get(target) {
        Some(p) if p.id != president && p.is_eligible() => Ok(()),
        _ => Err(GameError::InvalidTarget(target)),
    }
}

/// Players the president could target.
#[must_use]
pub fn targets(roster: &Roster, president: PlayerId) -> Vec<PlayerId> {
    roster
        .eligible()
        .map(|p| p.id)
        .filter(|&id| id != president)
        .collect()
}
