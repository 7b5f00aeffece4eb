//! Legislative session rules: draw three, discard one, enact one, veto.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result, RoomConfig};
use crate::deck::{same_cards, Policy};

/// Cards the president draws.
pub const DRAW_SIZE: usize = 3;

/// An elected president and running mate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Government {
    pub president: PlayerId,
    pub running_mate: PlayerId,
}

/// Where the running mate stands with respect to veto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VetoStatus {
    /// Veto not unlocked (or disabled by config).
    Unavailable,
    /// The running mate may propose a veto.
    Available,
    /// Waiting for the president to confirm or deny.
    Requested,
    /// The president refused; the running mate must enact.
    Denied,
}

impl VetoStatus {
    /// Initial status for a running mate's turn.
    #[must_use]
    pub fn for_board(config: &RoomConfig, radical_enacted: u8) -> Self {
        if config.veto_enabled && radical_enacted >= config.veto_threshold {
            VetoStatus::Available
        } else {
            VetoStatus::Unavailable
        }
    }
}

/// The president's discard must split the dealt hand exactly.
pub fn check_discard(hand: &[Policy], discarded: Policy, kept: [Policy; 2]) -> Result<()> {
    if same_cards(hand, &[discarded, kept[0], kept[1]]) {
        Ok(())
    } else {
        Err(GameError::HandMismatch)
    }
}

/// The running mate's choice must split the forwarded pair exactly.
pub fn check_enact(hand: [Policy; 2], enacted: Policy, discarded: Policy) -> Result<()> {
    if same_cards(&hand, &[enacted, discarded]) {
        Ok(())
    } else {
        Err(GameError::HandMismatch)
    }
}
