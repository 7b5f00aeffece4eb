//! Bot policies and the playout loop.

use crate::core::{GameError, GameRng, Intent, PlayerId, Result};
use crate::room::{Room, RoomCode, RoomRegistry};
use crate::rules::GameResult;

/// Picks one intent for `player` from a non-empty list of legal intents.
pub trait BotPolicy: Send + Sync {
    fn choose(&self, room: &Room, player: PlayerId, intents: &[Intent], rng: &mut GameRng) -> usize;
}

/// Uniform random choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomBot;

impl BotPolicy for RandomBot {
    fn choose(&self, _room: &Room, _player: PlayerId, intents: &[Intent], rng: &mut GameRng) -> usize {
        rng.gen_range_usize(0..intents.len())
    }
}

/// How a playout ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Playout {
    /// `None` if the step limit was hit first.
    pub result: Option<GameResult>,
    /// Intents applied.
    pub steps: usize,
    /// Rounds started.
    pub rounds: u32,
}

/// Seat `count` bots named `Bot0`, `Bot1`, ... with ids starting at `first_id`.
pub fn seat_bots(room: &mut Room, count: usize, first_id: u64) -> Result<Vec<PlayerId>> {
    let mut seated = Vec::with_capacity(count);
    for i in 0..count {
        let id = PlayerId::new(first_id + i as u64);
        room.join(id, &format!("Bot{}", i))?;
        seated.push(id);
    }
    Ok(seated)
}

/// Play `room` until the game ends or `max_steps` intents were applied.
///
/// Each step picks a random seat among those with something to do, then lets
/// the policy pick that seat's intent. A zero `max_steps` means no limit.
pub fn play_out<P: BotPolicy + ?Sized>(
    room: &mut Room,
    policy: &P,
    rng: &mut GameRng,
    max_steps: usize,
) -> Result<Playout> {
    let mut steps = 0;

    loop {
        if let Some(result) = room.phase().result() {
            return Ok(Playout { result: Some(result), steps, rounds: room.round() });
        }
        if max_steps > 0 && steps >= max_steps {
            break;
        }

        let actors: Vec<(PlayerId, Vec<Intent>)> = room
            .roster()
            .iter()
            .map(|p| (p.id, room.legal_intents(p.id)))
            .filter(|(_, intents)| !intents.is_empty())
            .collect();
        if actors.is_empty() {
            break;
        }

        let (actor, intents) = &actors[rng.gen_range_usize(0..actors.len())];
        let pick = policy.choose(room, *actor, intents, rng).min(intents.len() - 1);
        room.handle(*actor, intents[pick].clone())?;
        steps += 1;
    }

    Ok(Playout { result: room.phase().result(), steps, rounds: room.round() })
}

/// Like [`play_out`], but every intent is routed through `registry`, so the
/// room is torn down the moment its game ends.
///
/// The room must already be seated. If `max_steps` runs out first the room
/// is left open.
pub fn play_out_in_registry<P: BotPolicy + ?Sized>(
    registry: &mut RoomRegistry,
    code: &RoomCode,
    policy: &P,
    rng: &mut GameRng,
    max_steps: usize,
) -> Result<Playout> {
    let mut steps = 0;

    loop {
        let room = registry
            .room(code)
            .ok_or_else(|| GameError::RoomNotFound(code.to_string()))?;
        let rounds = room.round();
        if max_steps > 0 && steps >= max_steps {
            return Ok(Playout { result: None, steps, rounds });
        }

        let actors: Vec<(PlayerId, Vec<Intent>)> = room
            .roster()
            .iter()
            .map(|p| (p.id, room.legal_intents(p.id)))
            .filter(|(_, intents)| !intents.is_empty())
            .collect();
        if actors.is_empty() {
            return Ok(Playout { result: None, steps, rounds });
        }

        let (actor, intents) = &actors[rng.gen_range_usize(0..actors.len())];
        let pick = policy.choose(room, *actor, intents, rng).min(intents.len() - 1);
        let outcome = registry.handle(code.as_str(), *actor, intents[pick].clone())?;
        steps += 1;

        if outcome.closed {
            return Ok(Playout { result: outcome.game_over(), steps, rounds });
        }
    }
}
