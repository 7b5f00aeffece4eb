//! Engine error taxonomy.
//!
//! Every variant except `NoEligiblePresident` rejects a single intent and
//! leaves the room untouched; the error is reported to the acting player only.

use thiserror::Error;

use super::player::PlayerId;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("at least {required} players are needed, the room has {present}")]
    InsufficientPlayers { required: usize, present: usize },

    #[error("room not found: {0}")]
    RoomNotFound(String),

    #[error("invalid room code: {0:?}")]
    InvalidRoomCode(String),

    #[error("room code already in use: {0}")]
    RoomCodeTaken(String),

    #[error("room is full ({0} players)")]
    RoomFull(usize),

    #[error("name already taken: {0}")]
    NameAlreadyTaken(String),

    #[error("invalid display name: {0:?}")]
    InvalidName(String),

    #[error("{0} is already seated in a room")]
    AlreadyInRoom(PlayerId),

    #[error("{0} is not in this room")]
    PlayerNotFound(PlayerId),

    #[error("a game is already in progress")]
    GameAlreadyActive,

    #[error("only the host can do that")]
    NotHost,

    #[error("only the current president can do that")]
    NotCurrentPresident,

    #[error("{0} cannot be nominated")]
    InvalidNominee(PlayerId),

    #[error("{0} is term limited")]
    TermLimited(PlayerId),

    #[error("voting is closed")]
    VotingClosed,

    #[error("{0} is not eligible to vote")]
    NotEligibleVoter(PlayerId),

    #[error("{0} has already voted")]
    DuplicateVote(PlayerId),

    #[error("that action is not allowed in the current phase")]
    WrongPhase,

    #[error("the submitted policies do not match the hand dealt")]
    HandMismatch,

    #[error("veto is not available")]
    VetoUnavailable,

    #[error("{0} is not a valid target")]
    InvalidTarget(PlayerId),

    #[error("no eligible president remains")]
    NoEligiblePresident,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Fatal errors are invariant violations; the room is torn down.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::NoEligiblePresident)
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
