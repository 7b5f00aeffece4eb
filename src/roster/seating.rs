//! The ordered player list of a room and role assignment.
//!
//! Seat order is join order and never changes during a game; turn rotation
//! indexes into it.

use serde::{Deserialize, Serialize};

use super::player::{Alignment, Player, PlayerView, Role};
use crate::core::{GameError, GameRng, PlayerId, Result};

/// Longest display name accepted, in characters.
pub const MAX_NAME_LEN: usize = 24;

/// Infiltrators dealt for a table of `players`.
///
/// 5-6 → 1, 7-8 → 2, 9-10 → 3.
#[must_use]
pub fn infiltrator_count(players: usize) -> usize {
    players.saturating_sub(3) / 2
}

/// Another antagonist a player has been told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teammate {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
}

/// One player's private role delivery. Produced once, at assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleReveal {
    pub player: PlayerId,
    pub role: Role,
    pub alignment: Alignment,
    pub teammates: Vec<Teammate>,
}

/// Result of removing a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Departure {
    pub player: Player,
    /// Set when the host left and another player inherited the role.
    pub new_host: Option<PlayerId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Seat a new player. The first player seated becomes host.
    pub fn join(&mut self, id: PlayerId, name: &str) -> Result<&Player> {
        if self.contains(id) {
            return Err(GameError::AlreadyInRoom(id));
        }
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(GameError::InvalidName(name.to_string()));
        }
        let lowered = name.to_lowercase();
        if self.players.iter().any(|p| p.name.to_lowercase() == lowered) {
            return Err(GameError::NameAlreadyTaken(name.to_string()));
        }

        let is_host = self.players.is_empty();
        self.players.push(Player::new(id, name, is_host));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Remove a player, handing host to the next seat if needed.
    pub fn remove(&mut self, id: PlayerId) -> Option<Departure> {
        let seat = self.seat_of(id)?;
        let player = self.players.remove(seat);
        let mut new_host = None;
        if player.is_host {
            if let Some(next) = self.players.first_mut() {
                next.is_host = true;
                new_host = Some(next.id);
            }
        }
        Some(Departure { player, new_host })
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.seat_of(id).is_some()
    }

    #[must_use]
    pub fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    #[must_use]
    pub fn at(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Look up a player or fail with `PlayerNotFound`.
    pub fn require(&self, id: PlayerId) -> Result<&Player> {
        self.get(id).ok_or(GameError::PlayerNotFound(id))
    }

    #[must_use]
    pub fn host(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_host)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Players who are alive and not expelled, in seat order.
    pub fn eligible(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_eligible())
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.eligible().count()
    }

    #[must_use]
    pub fn leader(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.role == Role::Leader)
    }

    #[must_use]
    pub fn views(&self) -> Vec<PlayerView> {
        self.players.iter().map(Player::view).collect()
    }

    /// Every player with their role, for the end-of-game reveal.
    #[must_use]
    pub fn roles(&self) -> Vec<(PlayerId, Role)> {
        self.players.iter().map(|p| (p.id, p.role)).collect()
    }

    /// Deal roles from a uniform shuffle of the table.
    ///
    /// The first shuffled seat is the Leader, the next `infiltrator_count(n)`
    /// are Infiltrators, the rest Loyalists. Infiltrators learn every other
    /// antagonist; the Leader learns them only at tables of at most
    /// `leader_knows_team_max_players`.
    pub fn assign_roles(
        &mut self,
        rng: &mut GameRng,
        min_players: usize,
        leader_knows_team_max_players: usize,
    ) -> Result<Vec<RoleReveal>> {
        let n = self.players.len();
        if n < min_players.max(5) {
            return Err(GameError::InsufficientPlayers {
                required: min_players.max(5),
                present: n,
            });
        }
        if self.players.iter().any(|p| p.role != Role::Unassigned) {
            return Err(GameError::GameAlreadyActive);
        }

        let mut seats: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut seats);

        let infiltrators = infiltrator_count(n);
        for (rank, &seat) in seats.iter().enumerate() {
            self.players[seat].role = match rank {
                0 => Role::Leader,
                r if r <= infiltrators => Role::Infiltrator,
                _ => Role::Loyalist,
            };
        }

        let antagonists: Vec<Teammate> = self
            .players
            .iter()
            .filter(|p| p.alignment() == Alignment::Antagonist)
            .map(|p| Teammate {
                id: p.id,
                name: p.name.clone(),
                role: p.role,
            })
            .collect();

        let leader_sees_team = n <= leader_knows_team_max_players;
        let reveals = self
            .players
            .iter()
            .map(|p| {
                let teammates = match p.role {
                    Role::Infiltrator => antagonists.iter().filter(|t| t.id != p.id).cloned().collect(),
                    Role::Leader if leader_sees_team => {
                        antagonists.iter().filter(|t| t.id != p.id).cloned().collect()
                    }
                    _ => Vec::new(),
                };
                RoleReveal {
                    player: p.id,
                    role: p.role,
                    alignment: p.alignment(),
                    teammates,
                }
            })
            .collect();

        Ok(reveals)
    }
}
