//! Helpers for driving rooms through scripted games.

#![allow(dead_code)]

use hidden_ballot::{Intent, Outcome, Phase, PlayerId, Policy, PowerUse, Room, RoomCode, RoomConfig};

pub const CODE: &str = "ABCDE";

pub fn p(id: u64) -> PlayerId {
    PlayerId::new(id)
}

/// A lobby holding players `0..players`, named `P0`, `P1`, ...; `P0` hosts.
pub fn lobby_with(players: usize, config: RoomConfig, seed: u64) -> Room {
    let code: RoomCode = CODE.parse().unwrap();
    let mut room = Room::new(code, config, seed).unwrap();
    for i in 0..players {
        room.join(p(i as u64), &format!("P{}", i)).unwrap();
    }
    room
}

pub fn lobby(players: usize, seed: u64) -> Room {
    lobby_with(players, RoomConfig::default(), seed)
}

/// A started game, first president nominating.
pub fn started(players: usize, seed: u64) -> Room {
    let mut room = lobby(players, seed);
    room.start_game(p(0)).unwrap();
    room
}

pub fn started_with(players: usize, config: RoomConfig, seed: u64) -> Room {
    let mut room = lobby_with(players, config, seed);
    room.start_game(p(0)).unwrap();
    room
}

pub fn president(room: &Room) -> PlayerId {
    room.phase().president().expect("phase has a president")
}

pub fn leader(room: &Room) -> PlayerId {
    room.roster().leader().expect("roles assigned").id
}

/// First nominable player other than the Leader.
pub fn safe_nominee(room: &Room) -> PlayerId {
    let leader = leader(room);
    room.legal_intents(president(room))
        .into_iter()
        .find_map(|intent| match intent {
            Intent::Nominate { nominee } if nominee != leader => Some(nominee),
            _ => None,
        })
        .expect("a non-Leader nominee exists")
}

/// Every eligible player votes the same way. Returns the last outcome.
pub fn vote_all(room: &mut Room, approve: bool) -> Outcome {
    let voters: Vec<PlayerId> = room.roster().eligible().map(|pl| pl.id).collect();
    let mut last = Outcome::new();
    for voter in voters {
        last = room.vote(voter, approve).unwrap();
    }
    last
}

/// Nominate `nominee` and have everyone approve.
pub fn elect(room: &mut Room, nominee: PlayerId) -> Outcome {
    let president = president(room);
    room.nominate(president, nominee).unwrap();
    vote_all(room, true)
}

/// Nominate a safe running mate and have everyone reject.
pub fn fail_election(room: &mut Room) -> Outcome {
    let president = president(room);
    let nominee = safe_nominee(room);
    room.nominate(president, nominee).unwrap();
    vote_all(room, false)
}

pub fn other(policy: Policy) -> Policy {
    match policy {
        Policy::Radical => Policy::Traditional,
        Policy::Traditional => Policy::Radical,
    }
}

/// Elect a safe government and have it enact `policy`. Returns the enact
/// outcome and the running mate.
pub fn pass_policy(room: &mut Room, policy: Policy) -> (Outcome, PlayerId) {
    room.stack_draw_pile(&[policy, policy, other(policy)]).unwrap();
    let president = president(room);
    let mate = safe_nominee(room);
    elect(room, mate);
    room.draw_policies(president).unwrap();
    room.president_discard(president, other(policy), [policy, policy]).unwrap();
    let outcome = room.running_mate_enact(mate, policy, policy).unwrap();
    (outcome, mate)
}

/// Use a granted power without ending the game, then move on.
pub fn resolve_power(room: &mut Room) {
    let Phase::PowerInProgress { president, pending } = *room.phase() else {
        return;
    };
    let leader = leader(room);
    let target = room
        .roster()
        .eligible()
        .map(|pl| pl.id)
        .find(|&id| id != president && id != leader)
        .expect("a harmless target exists");
    let power = match pending.power {
        hidden_ballot::Power::Investigate => PowerUse::Investigate { target },
        hidden_ballot::Power::Peek => PowerUse::Peek,
        hidden_ballot::Power::Expel => PowerUse::Expel { target },
    };
    room.use_power(president, power).unwrap();
    if pending.power.needs_resume() {
        room.resume(president).unwrap();
    }
}
