//! Seated players, their hidden roles and public views.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Hidden role dealt at game start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Unassigned,
    Loyalist,
    Infiltrator,
    /// The single hidden antagonist-in-chief.
    Leader,
}

impl Role {
    /// Alignment is fixed by role.
    #[must_use]
    pub fn alignment(self) -> Alignment {
        match self {
            Role::Leader | Role::Infiltrator => Alignment::Antagonist,
            Role::Loyalist | Role::Unassigned => Alignment::Protagonist,
        }
    }
}

/// Party a role plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Protagonist,
    Antagonist,
}

/// A seat in the room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_host: bool,
    pub role: Role,
    pub alive: bool,
    pub expelled: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_host: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_host,
            role: Role::Unassigned,
            alive: true,
            expelled: false,
        }
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.role.alignment()
    }

    /// May vote, be nominated and hold the presidency.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.alive && !self.expelled
    }

    /// What every other player is allowed to see.
    #[must_use]
    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            name: self.name.clone(),
            is_host: self.is_host,
            alive: self.alive,
            expelled: self.expelled,
        }
    }
}

/// Public projection of a player; never carries the role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub is_host: bool,
    pub alive: bool,
    pub expelled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_follows_role() {
        assert_eq!(Role::Leader.alignment(), Alignment::Antagonist);
        assert_eq!(Role::Infiltrator.alignment(), Alignment::Antagonist);
        assert_eq!(Role::Loyalist.alignment(), Alignment::Protagonist);
    }

    #[test]
    fn test_eligibility() {
        let mut p = Player::new(PlayerId::new(1), "Ada", false);
        assert!(p.is_eligible());
        p.expelled = true;
        assert!(!p.is_eligible());
    }

    #[test]
    fn test_view_hides_role() {
        let mut p = Player::new(PlayerId::new(1), "Ada", true);
        p.role = Role::Leader;
        let json = serde_json::to_string(&p.view()).unwrap();
        assert!(!json.contains("leader"));
        assert!(json.contains("Ada"));
    }
}
