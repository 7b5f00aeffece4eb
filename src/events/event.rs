//! Events produced by intent handlers.
//!
//! `GameEvent`s go to every seat in the room. `PrivateEvent`s go to a single
//! player and are the only channel through which hidden information leaves
//! the engine.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::deck::{Policy, PolicyHand, PolicyTally};
use crate::election::Tally;
use crate::legislature::VetoStatus;
use crate::powers::Power;
use crate::roster::{Alignment, PlayerView, Role, RoleReveal};
use crate::rules::GameResult;

/// Room-wide broadcast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerJoined {
        player: PlayerView,
        roster: Vec<PlayerView>,
    },
    PlayerLeft {
        player: PlayerId,
        new_host: Option<PlayerId>,
        roster: Vec<PlayerView>,
    },
    GameStarted {
        players: Vec<PlayerView>,
        infiltrators: usize,
    },
    NewRound {
        round: u32,
        president: PlayerId,
        nominable: Vec<PlayerId>,
        election_tracker: u8,
    },
    Nominated {
        president: PlayerId,
        nominee: PlayerId,
    },
    /// Only who voted; choices stay hidden until the ballot resolves.
    VoteCast {
        voter: PlayerId,
        remaining: usize,
    },
    ElectionResolved {
        tally: Tally,
        election_tracker: u8,
    },
    DeckReshuffled {
        draw_pile: usize,
    },
    PoliciesDrawn {
        president: PlayerId,
    },
    PresidentDiscarded {
        president: PlayerId,
        running_mate: PlayerId,
    },
    VetoRequested {
        running_mate: PlayerId,
    },
    VetoResolved {
        approved: bool,
        election_tracker: u8,
    },
    PolicyEnacted {
        policy: Policy,
        forced: bool,
        board: PolicyTally,
    },
    PowerGranted {
        president: PlayerId,
        power: Power,
    },
    PlayerInvestigated {
        president: PlayerId,
        target: PlayerId,
    },
    DrawPilePeeked {
        president: PlayerId,
    },
    PlayerExpelled {
        player: PlayerId,
    },
    Chat {
        from: PlayerId,
        name: String,
        message: String,
    },
    GameOver {
        result: GameResult,
        board: PolicyTally,
        roles: Vec<(PlayerId, Role)>,
    },
}

/// Delivery to a single player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PrivateEvent {
    Joined {
        room: String,
        is_host: bool,
    },
    RoleAssigned(RoleReveal),
    /// The president's three cards.
    PoliciesDealt {
        cards: PolicyHand,
    },
    /// The two cards forwarded to the running mate.
    PoliciesForwarded {
        cards: [Policy; 2],
        veto: VetoStatus,
    },
    InvestigationResult {
        target: PlayerId,
        alignment: Alignment,
    },
    PeekResult {
        cards: PolicyHand,
    },
}

/// A private event and its recipient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub to: PlayerId,
    pub event: PrivateEvent,
}
