//! The result bundle an intent handler hands back to the transport.

use std::time::Duration;

use serde::Serialize;

use super::event::{Delivery, GameEvent, PrivateEvent};
use crate::core::PlayerId;
use crate::rules::GameResult;

/// Everything one accepted intent produced, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Events for every seat in the room.
    pub broadcast: Vec<GameEvent>,

    /// Events for individual players.
    pub private: Vec<Delivery>,

    /// Advisory pause before showing private deliveries. Cosmetic only.
    pub reveal_delay: Option<Duration>,

    /// The room was torn down after this outcome.
    pub closed: bool,
}

impl Outcome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broadcast(&mut self, event: GameEvent) {
        self.broadcast.push(event);
    }

    pub fn whisper(&mut self, to: PlayerId, event: PrivateEvent) {
        self.private.push(Delivery { to, event });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.broadcast.is_empty() && self.private.is_empty()
    }

    /// Private events addressed to `player`.
    pub fn private_for(&self, player: PlayerId) -> impl Iterator<Item = &PrivateEvent> {
        self.private.iter().filter(move |d| d.to == player).map(|d| &d.event)
    }

    /// The game result, if this outcome ended the game.
    #[must_use]
    pub fn game_over(&self) -> Option<GameResult> {
        self.broadcast.iter().find_map(|e| match e {
            GameEvent::GameOver { result, .. } => Some(*result),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let mut outcome = Outcome::new();
        assert!(outcome.is_empty());

        outcome.broadcast(GameEvent::PlayerExpelled { player: PlayerId::new(1) });
        outcome.whisper(
            PlayerId::new(2),
            PrivateEvent::Joined { room: "ABCDE".into(), is_host: false },
        );

        assert!(!outcome.is_empty());
        assert_eq!(outcome.private_for(PlayerId::new(2)).count(), 1);
        assert_eq!(outcome.private_for(PlayerId::new(1)).count(), 0);
        assert_eq!(outcome.game_over(), None);
    }
}
