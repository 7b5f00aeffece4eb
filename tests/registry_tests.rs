//! Room registry tests: routing, isolation and teardown.

mod common;

use common::p;
use hidden_ballot::{GameError, GameEvent, GameResult, Intent, Phase, RoomConfig, RoomRegistry};

fn registry() -> RoomRegistry {
    RoomRegistry::new(RoomConfig::default().with_seed(5)).unwrap()
}

/// Fill a room with players `first..first + count` and start it.
fn open_game(registry: &mut RoomRegistry, code: &str, first: u64, count: u64) {
    registry.create_room_with_code(code, p(first), "Host").unwrap();
    for id in first + 1..first + count {
        registry.join_room(code, p(id), &format!("P{}", id)).unwrap();
    }
    registry.handle(code, p(first), Intent::Start).unwrap();
}

/// Codes match regardless of case or surrounding space.
#[test]
fn test_codes_are_case_insensitive() {
    let mut reg = registry();
    let (code, _) = reg.create_room(p(1), "Ada").unwrap();
    let lower = format!("  {}  ", code.as_str().to_lowercase());

    let outcome = reg.join_room(&lower, p(2), "Bo").unwrap();
    assert!(matches!(outcome.broadcast[0], GameEvent::PlayerJoined { .. }));
    assert_eq!(reg.room_of(p(2)), Some(&code));
}

/// Names are unique within a room, ignoring case.
#[test]
fn test_duplicate_names_rejected() {
    let mut reg = registry();
    reg.create_room_with_code("NAMES", p(1), "Ada").unwrap();
    assert_eq!(
        reg.join_room("NAMES", p(2), "ada"),
        Err(GameError::NameAlreadyTaken("ada".into()))
    );
    assert!(reg.room_of(p(2)).is_none());
}

/// Only the host starts, and the host role passes on when they leave.
#[test]
fn test_host_handover() {
    let mut reg = registry();
    reg.create_room_with_code("HOSTS", p(0), "P0").unwrap();
    for id in 1..5 {
        reg.join_room("HOSTS", p(id), &format!("P{}", id)).unwrap();
    }
    assert_eq!(reg.handle("HOSTS", p(1), Intent::Start), Err(GameError::NotHost));

    let outcome = reg.handle("HOSTS", p(0), Intent::Leave).unwrap();
    assert!(matches!(
        outcome.broadcast[0],
        GameEvent::PlayerLeft { new_host: Some(id), .. } if id == p(1)
    ));
    reg.join_room("HOSTS", p(5), "P5").unwrap();
    reg.handle("HOSTS", p(1), Intent::Start).unwrap();
}

/// Display names may be at most 24 characters long.
#[test]
fn test_name_length_limit() {
    let mut reg = registry();
    let longest = "N".repeat(24);
    reg.create_room_with_code("NAMES", p(1), &longest).unwrap();

    let too_long = "M".repeat(25);
    assert_eq!(
        reg.join_room("NAMES", p(2), &too_long),
        Err(GameError::InvalidName(too_long.clone()))
    );
    assert!(reg.room_of(p(2)).is_none());
    reg.join_room("NAMES", p(2), &"ß".repeat(24)).unwrap();
}

/// Joining a full room or a running game fails.
#[test]
fn test_join_limits() {
    let mut reg = registry();
    reg.create_room_with_code("FULL1", p(0), "P0").unwrap();
    for id in 1..10 {
        reg.join_room("FULL1", p(id), &format!("P{}", id)).unwrap();
    }
    assert_eq!(reg.join_room("FULL1", p(10), "P10"), Err(GameError::RoomFull(10)));

    open_game(&mut reg, "LIVE1", 20, 5);
    assert_eq!(reg.join_room("LIVE1", p(30), "Late"), Err(GameError::GameAlreadyActive));
    assert!(reg.room_of(p(30)).is_none());
}

/// One room's traffic never touches another.
#[test]
fn test_rooms_are_isolated() {
    let mut reg = registry();
    open_game(&mut reg, "ROOMA", 0, 5);
    open_game(&mut reg, "ROOMB", 10, 5);

    assert_eq!(
        reg.handle("ROOMB", p(0), Intent::Nominate { nominee: p(1) }),
        Err(GameError::NotCurrentPresident)
    );
    reg.handle("ROOMA", p(0), Intent::Nominate { nominee: p(1) }).unwrap();

    let a = reg.room(&"ROOMA".parse().unwrap()).unwrap();
    let b = reg.room(&"ROOMB".parse().unwrap()).unwrap();
    assert!(matches!(a.phase(), Phase::Voting { .. }));
    assert!(matches!(b.phase(), Phase::Nomination { .. }));
}

/// A disconnect mid-game ends the game and frees every seat.
#[test]
fn test_disconnect_mid_game() {
    let mut reg = registry();
    open_game(&mut reg, "DROP1", 0, 6);

    let outcome = reg.disconnect(p(4)).unwrap();
    assert_eq!(outcome.game_over(), Some(GameResult::Abandoned { player: p(4) }));
    assert!(outcome.closed);
    assert!(reg.is_empty());

    for id in 0..6 {
        assert!(reg.room_of(p(id)).is_none());
    }
    reg.create_room(p(0), "P0").unwrap();
}

/// Unknown players and malformed codes are reported, not ignored.
#[test]
fn test_routing_errors() {
    let mut reg = registry();
    open_game(&mut reg, "ROUTE", 0, 5);

    assert!(matches!(reg.handle("no!", p(0), Intent::Start), Err(GameError::InvalidRoomCode(_))));
    assert_eq!(
        reg.handle("ROUTE", p(77), Intent::Vote { approve: true }),
        Err(GameError::VotingClosed)
    );
    assert_eq!(reg.handle("ROUTE", p(77), Intent::Leave), Err(GameError::PlayerNotFound(p(77))));
    assert!(reg.disconnect(p(77)).is_none());
    assert_eq!(reg.len(), 1);
}
