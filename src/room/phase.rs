//! The room's phase machine.
//!
//! ```text
//! Lobby → RoleAssignment → Nomination ⇄ Voting → PresidentialDraw
//!       → PresidentDiscard → RunningMateEnact → [PowerInProgress]
//!       → Nomination (next round) | GameOver
//! ```
//!
//! Each variant carries exactly the data that phase needs, so there are no
//! half-set optional fields to keep consistent.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::deck::{Policy, PolicyHand};
use crate::election::Election;
use crate::legislature::{Government, VetoStatus};
use crate::powers::PendingPower;
use crate::rules::GameResult;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Accepting joins.
    #[default]
    Lobby,
    /// Roles being dealt. Only observable inside the start handler.
    RoleAssignment,
    Nomination {
        president: PlayerId,
    },
    Voting {
        election: Election,
    },
    PresidentialDraw {
        government: Government,
    },
    PresidentDiscard {
        government: Government,
        hand: PolicyHand,
    },
    RunningMateEnact {
        government: Government,
        hand: [Policy; 2],
        veto: VetoStatus,
    },
    PowerInProgress {
        president: PlayerId,
        pending: PendingPower,
    },
    GameOver {
        result: GameResult,
    },
}

impl Phase {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Lobby => "lobby",
            Phase::RoleAssignment => "role_assignment",
            Phase::Nomination { .. } => "nomination",
            Phase::Voting { .. } => "voting",
            Phase::PresidentialDraw { .. } => "presidential_draw",
            Phase::PresidentDiscard { .. } => "president_discard",
            Phase::RunningMateEnact { .. } => "running_mate_enact",
            Phase::PowerInProgress { .. } => "power_in_progress",
            Phase::GameOver { .. } => "game_over",
        }
    }

    /// A game has started and not finished.
    #[must_use]
    pub fn is_in_game(&self) -> bool {
        !matches!(self, Phase::Lobby | Phase::GameOver { .. })
    }

    /// The sitting president, if the phase has one.
    #[must_use]
    pub fn president(&self) -> Option<PlayerId> {
        match self {
            Phase::Nomination { president } | Phase::PowerInProgress { president, .. } => Some(*president),
            Phase::Voting { election } => Some(election.president),
            Phase::PresidentialDraw { government }
            | Phase::PresidentDiscard { government, .. }
            | Phase::RunningMateEnact { government, .. } => Some(government.president),
            Phase::Lobby | Phase::RoleAssignment | Phase::GameOver { .. } => None,
        }
    }

    /// Policy cards currently held by the government.
    #[must_use]
    pub fn cards_in_hand(&self) -> usize {
        match self {
            Phase::PresidentDiscard { hand, .. } => hand.len(),
            Phase::RunningMateEnact { hand, .. } => hand.len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            Phase::GameOver { result } => Some(*result),
            _ => None,
        }
    }
}
