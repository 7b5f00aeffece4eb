//! Termination conditions.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RoomConfig};
use crate::deck::PolicyTally;
use crate::roster::{Alignment, Role, Roster};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameResult {
    /// Enough traditional policies were enacted.
    TraditionalPolicies,
    /// Enough radical policies were enacted.
    RadicalPolicies,
    /// The Leader was elected running mate after the radical threshold.
    LeaderElected,
    /// The Leader was expelled.
    LeaderExpelled,
    /// A player left mid-game; nobody wins.
    Abandoned { player: PlayerId },
}

impl GameResult {
    /// Winning side, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Alignment> {
        match self {
            GameResult::TraditionalPolicies | GameResult::LeaderExpelled => Some(Alignment::Protagonist),
            GameResult::RadicalPolicies | GameResult::LeaderElected => Some(Alignment::Antagonist),
            GameResult::Abandoned { .. } => None,
        }
    }

    #[must_use]
    pub fn is_winner(&self, alignment: Alignment) -> bool {
        self.winner() == Some(alignment)
    }
}

/// Win thresholds for one room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinEvaluator {
    traditional_win: u8,
    radical_win: u8,
    leader_election_threshold: u8,
}

impl WinEvaluator {
    #[must_use]
    pub fn new(config: &RoomConfig) -> Self {
        Self {
            traditional_win: config.traditional_win,
            radical_win: config.radical_win,
            leader_election_threshold: config.leader_election_threshold,
        }
    }

    /// Checked after every enactment and every expulsion. First match wins.
    #[must_use]
    pub fn check(&self, board: &PolicyTally, roster: &Roster) -> Option<GameResult> {
        if board.traditional >= self.traditional_win {
            return Some(GameResult::TraditionalPolicies);
        }
        if board.radical >= self.radical_win {
            return Some(GameResult::RadicalPolicies);
        }
        if roster.leader().is_some_and(|leader| leader.expelled) {
            return Some(GameResult::LeaderExpelled);
        }
        None
    }

    /// Checked when an election passes, before any policy is drawn.
    #[must_use]
    pub fn check_election(&self, board: &PolicyTally, roster: &Roster, running_mate: PlayerId) -> Option<GameResult> {
        let is_leader = roster.get(running_mate).is_some_and(|p| p.role == Role::Leader);
        (board.radical >= self.leader_election_threshold && is_leader).then_some(GameResult::LeaderElected)
    }
}
