//! Nomination, term limits and vote collection.
//!
//! ## Term limits
//!
//! The previous running mate can never be nominated again immediately. The
//! previous president is barred too, but only while more than five players
//! remain eligible. Both are cleared by a forced enactment.
//!
//! ## Majority
//!
//! An election passes when yes votes exceed half of the eligible players,
//! rounded down. A tie fails.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId, Result};
use crate::roster::Roster;

/// Above this many eligible players the last president is term limited too.
pub const PRESIDENT_TERM_LIMIT_MIN_LIVING: usize = 5;

/// Memory of the last government that actually enacted a policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermLimits {
    pub last_president: Option<PlayerId>,
    pub last_running_mate: Option<PlayerId>,
}

impl TermLimits {
    pub fn record(&mut self, president: PlayerId, running_mate: PlayerId) {
        self.last_president = Some(president);
        self.last_running_mate = Some(running_mate);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `nominee` is barred at a table of `living` eligible players.
    #[must_use]
    pub fn blocks(&self, nominee: PlayerId, living: usize) -> bool {
        self.last_running_mate == Some(nominee)
            || (living > PRESIDENT_TERM_LIMIT_MIN_LIVING && self.last_president == Some(nominee))
    }
}

/// Check a nomination without touching any state.
pub fn validate_nomination(
    roster: &Roster,
    term_limits: &TermLimits,
    president: PlayerId,
    caller: PlayerId,
    nominee: PlayerId,
) -> Result<()> {
    if caller != president {
        return Err(GameError::NotCurrentPresident);
    }
    let candidate = roster.get(nominee).ok_or(GameError::InvalidNominee(nominee))?;
    if nominee == president || !candidate.is_eligible() {
        return Err(GameError::InvalidNominee(nominee));
    }
    if term_limits.blocks(nominee, roster.living_count()) {
        return Err(GameError::TermLimited(nominee));
    }
    Ok(())
}

/// Players the president could legally nominate right now.
#[must_use]
pub fn nominable(roster: &Roster, term_limits: &TermLimits, president: PlayerId) -> Vec<PlayerId> {
    roster
        .eligible()
        .map(|p| p.id)
        .filter(|&id| validate_nomination(roster, term_limits, president, president, id).is_ok())
        .collect()
}

/// One round's ballot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    pub president: PlayerId,
    pub nominee: PlayerId,
    votes: FxHashMap<PlayerId, bool>,
}

/// Counted result of a completed ballot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub yes: usize,
    pub no: usize,
    pub passed: bool,
    /// Every vote, in seat order.
    pub votes: Vec<(PlayerId, bool)>,
}

impl Election {
    #[must_use]
    pub fn new(president: PlayerId, nominee: PlayerId) -> Self {
        Self {
            president,
            nominee,
            votes: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    #[must_use]
    pub fn has_voted(&self, player: PlayerId) -> bool {
        self.votes.contains_key(&player)
    }

    /// Check a vote without recording it.
    pub fn check_vote(&self, roster: &Roster, voter: PlayerId) -> Result<()> {
        let player = roster.require(voter)?;
        if !player.is_eligible() {
            return Err(GameError::NotEligibleVoter(voter));
        }
        if self.has_voted(voter) {
            return Err(GameError::DuplicateVote(voter));
        }
        Ok(())
    }

    /// Record a vote.
    pub fn cast(&mut self, roster: &Roster, voter: PlayerId, approve: bool) -> Result<()> {
        self.check_vote(roster, voter)?;
        self.votes.insert(voter, approve);
        Ok(())
    }

    /// Every eligible player has voted.
    #[must_use]
    pub fn is_complete(&self, roster: &Roster) -> bool {
        self.votes.len() == roster.living_count()
    }

    /// Eligible players still to vote, in seat order.
    #[must_use]
    pub fn pending(&self, roster: &Roster) -> Vec<PlayerId> {
        roster
            .eligible()
            .map(|p| p.id)
            .filter(|id| !self.has_voted(*id))
            .collect()
    }

    #[must_use]
    pub fn tally(&self, roster: &Roster) -> Tally {
        let votes: Vec<(PlayerId, bool)> = roster
            .iter()
            .filter_map(|p| self.votes.get(&p.id).map(|&v| (p.id, v)))
            .collect();
        let yes = votes.iter().filter(|(_, v)| *v).count();
        let no = votes.len() - yes;
        Tally {
            yes,
            no,
            passed: yes > roster.living_count() / 2,
            votes,
        }
    }
}
