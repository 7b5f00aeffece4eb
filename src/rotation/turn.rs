//! Presidential rotation.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result};
use crate::roster::Roster;

/// Scan seats circularly from `index` for the first eligible player.
///
/// Returns the player and the index to resume from next round, which is
/// always one past the chosen seat no matter how many seats were skipped.
pub fn next_president(roster: &Roster, index: usize) -> Result<(PlayerId, usize)> {
    let n = roster.len();
    if n == 0 {
        return Err(GameError::NoEligiblePresident);
    }
    (0..n)
        .map(|offset| (index + offset) % n)
        .find_map(|seat| {
            roster
                .at(seat)
                .filter(|p| p.is_eligible())
                .map(|p| (p.id, (seat + 1) % n))
        })
        .ok_or(GameError::NoEligiblePresident)
}

/// Cursor into the seat order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rotation {
    index: usize,
}

impl Rotation {
    /// Seat to consider first next round.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Pick the next president and advance past them.
    pub fn advance(&mut self, roster: &Roster) -> Result<PlayerId> {
        let (president, next) = next_president(roster, self.index)?;
        self.index = next;
        Ok(president)
    }
}
