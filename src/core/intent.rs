//! Player intents and the record of accepted ones.
//!
//! An intent is one discrete request from a player. The transport decodes it
//! (JSON, tagged by `action`) and hands it to the room; the room either
//! applies it completely or rejects it without mutation.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::deck::Policy;
use crate::powers::PowerUse;

/// A request from one player to one room.
///
/// ```
/// use hidden_ballot::core::{Intent, PlayerId};
///
/// let intent: Intent = serde_json::from_str(r#"{"action":"nominate","nominee":4}"#).unwrap();
/// assert_eq!(intent, Intent::Nominate { nominee: PlayerId::new(4) });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    Join { name: String },
    Start,
    Nominate { nominee: PlayerId },
    Vote { approve: bool },
    DrawPolicies,
    PresidentDiscard { discarded: Policy, kept: [Policy; 2] },
    RunningMateEnact { enacted: Policy, discarded: Policy },
    RequestVeto,
    ConfirmVeto { approve: bool },
    UsePower(PowerUse),
    Resume,
    Leave,
    Chat { message: String },
}

impl Intent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Join { .. } => "join",
            Intent::Start => "start",
            Intent::Nominate { .. } => "nominate",
            Intent::Vote { .. } => "vote",
            Intent::DrawPolicies => "draw_policies",
            Intent::PresidentDiscard { .. } => "president_discard",
            Intent::RunningMateEnact { .. } => "running_mate_enact",
            Intent::RequestVeto => "request_veto",
            Intent::ConfirmVeto { .. } => "confirm_veto",
            Intent::UsePower(_) => "use_power",
            Intent::Resume => "resume",
            Intent::Leave => "leave",
            Intent::Chat { .. } => "chat",
        }
    }

    /// Whether this intent is part of play (as opposed to room membership or chat).
    #[must_use]
    pub fn is_game_action(&self) -> bool {
        !matches!(self, Intent::Join { .. } | Intent::Leave | Intent::Chat { .. })
    }
}

/// An accepted intent with ordering metadata.
///
/// The history of records, replayed against a room built from the same
/// seed, reproduces the room exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The player who submitted it.
    pub player: PlayerId,

    /// The intent itself.
    pub intent: Intent,

    /// Round number when it was applied (0 before the game starts).
    pub round: u32,

    /// Position in the room's history.
    pub sequence: u32,
}
