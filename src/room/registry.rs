//! Room registry.
//!
//! Owns every live room and the player-to-room index used to route
//! intents and disconnects. Rooms are independent: one room's error never
//! touches another. A room is dropped as soon as an outcome reports it
//! closed or it hits a fatal error.

use rustc_hash::FxHashMap;

use super::code::RoomCode;
use super::room::Room;
use crate::core::{GameError, GameRng, Intent, PlayerId, Result, RoomConfig};
use crate::events::Outcome;

/// Generated codes tried before giving up.
const MAX_CODE_ATTEMPTS: usize = 64;

/// Every live room, keyed by code.
#[derive(Debug)]
pub struct RoomRegistry {
    config: RoomConfig,
    rng: GameRng,
    rooms: FxHashMap<RoomCode, Room>,
    seats: FxHashMap<PlayerId, RoomCode>,
}

impl RoomRegistry {
    /// Registry whose rooms all use `config`.
    pub fn new(config: RoomConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            rooms: FxHashMap::default(),
            seats: FxHashMap::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[must_use]
    pub fn room(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.get(code)
    }

    /// Direct access for scripted setups such as stacking the deck.
    pub fn room_mut(&mut self, code: &RoomCode) -> Option<&mut Room> {
        self.rooms.get_mut(code)
    }

    /// The room `player` is seated in.
    #[must_use]
    pub fn room_of(&self, player: PlayerId) -> Option<&RoomCode> {
        self.seats.get(&player)
    }

    /// Open a room under a fresh code with `actor` as host.
    pub fn create_room(&mut self, actor: PlayerId, name: &str) -> Result<(RoomCode, Outcome)> {
        self.ensure_unseated(actor)?;
        let mut last = None;
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = RoomCode::generate(&mut self.rng);
            if !self.rooms.contains_key(&code) {
                return self.open(code, actor, name);
            }
            last = Some(code);
        }
        let taken = last.map(String::from).unwrap_or_default();
        Err(GameError::RoomCodeTaken(taken))
    }

    /// Open a room under a caller-chosen code.
    pub fn create_room_with_code(&mut self, code: &str, actor: PlayerId, name: &str) -> Result<(RoomCode, Outcome)> {
        let code: RoomCode = code.parse()?;
        if self.rooms.contains_key(&code) {
            return Err(GameError::RoomCodeTaken(code.to_string()));
        }
        self.ensure_unseated(actor)?;
        self.open(code, actor, name)
    }

    fn open(&mut self, code: RoomCode, actor: PlayerId, name: &str) -> Result<(RoomCode, Outcome)> {
        let seed = self.rng.fork().seed();
        let mut room = Room::new(code.clone(), self.config.clone(), seed)?;
        let outcome = room.join(actor, name)?;

        tracing::info!(room = %code, host = %actor, seed, "room created");
        self.rooms.insert(code.clone(), room);
        self.seats.insert(actor, code.clone());
        Ok((code, outcome))
    }

    /// Seat `actor` in an existing lobby.
    pub fn join_room(&mut self, code: &str, actor: PlayerId, name: &str) -> Result<Outcome> {
        self.handle(code, actor, Intent::Join { name: name.to_string() })
    }

    /// Route one intent to the room named by `code`.
    pub fn handle(&mut self, code: &str, actor: PlayerId, intent: Intent) -> Result<Outcome> {
        let code: RoomCode = code.parse()?;
        if matches!(intent, Intent::Join { .. }) {
            self.ensure_unseated(actor)?;
        }
        let room = self
            .rooms
            .get_mut(&code)
            .ok_or_else(|| GameError::RoomNotFound(code.to_string()))?;

        let joining = matches!(intent, Intent::Join { .. });
        let leaving = matches!(intent, Intent::Leave);
        match room.handle(actor, intent) {
            Ok(outcome) => {
                if joining {
                    self.seats.insert(actor, code.clone());
                }
                if leaving {
                    self.seats.remove(&actor);
                }
                if outcome.closed {
                    self.teardown(&code);
                }
                Ok(outcome)
            }
            Err(err) if err.is_fatal() => {
                tracing::error!(room = %code, %actor, %err, "fatal room error");
                self.teardown(&code);
                Err(err)
            }
            Err(err) => {
                tracing::warn!(room = %code, %actor, %err, "intent rejected");
                Err(err)
            }
        }
    }

    /// Treat a dropped connection as a leave. `None` if the player was not seated.
    pub fn disconnect(&mut self, actor: PlayerId) -> Option<Outcome> {
        let code = self.seats.get(&actor)?.to_string();
        match self.handle(&code, actor, Intent::Leave) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                tracing::debug!(room = %code, %actor, %err, "disconnect found no seat");
                self.seats.remove(&actor);
                None
            }
        }
    }

    fn ensure_unseated(&self, actor: PlayerId) -> Result<()> {
        if self.seats.contains_key(&actor) {
            return Err(GameError::AlreadyInRoom(actor));
        }
        Ok(())
    }

    fn teardown(&mut self, code: &RoomCode) {
        if self.rooms.remove(code).is_some() {
            self.seats.retain(|_, seat| seat != code);
            tracing::info!(room = %code, live = self.rooms.len(), "room closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u64) -> PlayerId {
        PlayerId::new(id)
    }

    fn registry() -> RoomRegistry {
        RoomRegistry::new(RoomConfig::default().with_seed(11)).unwrap()
    }

    #[test]
    fn test_create_generates_code() {
        let mut reg = registry();
        let (code, outcome) = reg.create_room(p(1), "Ada").unwrap();

        assert_eq!(code.as_str().len(), 5);
        assert_eq!(reg.room_of(p(1)), Some(&code));
        assert_eq!(reg.len(), 1);
        assert_eq!(outcome.private.len(), 1);
        assert!(reg.room(&code).unwrap().roster().get(p(1)).unwrap().is_host);
    }

    #[test]
    fn test_generation_is_seeded() {
        let mut a = registry();
        let mut b = registry();
        assert_eq!(a.create_room(p(1), "A").unwrap().0, b.create_room(p(1), "A").unwrap().0);
    }

    #[test]
    fn test_explicit_code_collision() {
        let mut reg = registry();
        reg.create_room_with_code("abcde", p(1), "Ada").unwrap();
        assert_eq!(
            reg.create_room_with_code("ABCDE", p(2), "Bo").unwrap_err(),
            GameError::RoomCodeTaken("ABCDE".into())
        );
        assert!(matches!(
            reg.create_room_with_code("!!", p(2), "Bo"),
            Err(GameError::InvalidRoomCode(_))
        ));
    }

    #[test]
    fn test_player_in_one_room_only() {
        let mut reg = registry();
        reg.create_room_with_code("ROOM1", p(1), "Ada").unwrap();
        reg.create_room_with_code("ROOM2", p(2), "Bo").unwrap();

        assert_eq!(reg.join_room("ROOM2", p(1), "Ada"), Err(GameError::AlreadyInRoom(p(1))));
        assert_eq!(reg.create_room(p(1), "Ada").unwrap_err(), GameError::AlreadyInRoom(p(1)));
    }

    #[test]
    fn test_unknown_room() {
        let mut reg = registry();
        assert_eq!(
            reg.join_room("ZZZZZ", p(1), "Ada"),
            Err(GameError::RoomNotFound("ZZZZZ".into()))
        );
    }

    #[test]
    fn test_empty_lobby_is_torn_down() {
        let mut reg = registry();
        let (code, _) = reg.create_room(p(1), "Ada").unwrap();
        reg.join_room(code.as_str(), p(2), "Bo").unwrap();

        assert!(reg.disconnect(p(1)).is_some());
        assert_eq!(reg.len(), 1);
        assert!(reg.room_of(p(1)).is_none());

        let outcome = reg.disconnect(p(2)).unwrap();
        assert!(outcome.closed);
        assert!(reg.is_empty());
        assert!(reg.disconnect(p(2)).is_none());
    }

    #[test]
    fn test_failed_create_leaves_no_room() {
        let mut reg = registry();
        assert!(matches!(reg.create_room(p(1), "   "), Err(GameError::InvalidName(_))));
        assert!(reg.is_empty());
        assert!(reg.room_of(p(1)).is_none());
    }

    #[test]
    fn test_fatal_error_tears_room_down() {
        let mut reg = registry();
        reg.create_room_with_code("FATAL", p(0), "P0").unwrap();
        for id in 1..5 {
            reg.join_room("FATAL", p(id), &format!("P{}", id)).unwrap();
        }
        reg.handle("FATAL", p(0), Intent::Start).unwrap();

        let code: RoomCode = "FATAL".parse().unwrap();
        reg.room_mut(&code).unwrap().strand_after_peek(p(0));

        assert_eq!(reg.handle("FATAL", p(0), Intent::Resume), Err(GameError::NoEligiblePresident));
        assert!(reg.is_empty());
        for id in 0..5 {
            assert!(reg.room_of(p(id)).is_none());
        }
    }
}
