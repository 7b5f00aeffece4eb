use hidden_ballot::core::GameRng;
use hidden_ballot::sim::{play_out, seat_bots, RandomBot};
use hidden_ballot::{Room, RoomCode, RoomConfig};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        playing_random_game_5,
        playing_random_game_10,
        listing_legal_intents,
}

fn seated_room(players: usize, seed: u64) -> Room {
    let code: RoomCode = "BENCH".parse().expect("valid code");
    let mut room = Room::new(code, RoomConfig::default(), seed).expect("valid config");
    seat_bots(&mut room, players, 1).expect("seats available");
    room
}

fn play(players: usize, seed: u64) -> usize {
    let mut room = seated_room(players, seed);
    let mut rng = GameRng::new(seed);
    play_out(&mut room, &RandomBot, &mut rng, 0)
        .expect("legal intents are accepted")
        .steps
}

fn playing_random_game_5(c: &mut criterion::Criterion) {
    let mut seed = 0;
    c.bench_function("play a random 5-player game", |b| {
        b.iter(|| {
            seed += 1;
            play(5, seed)
        })
    });
}

fn playing_random_game_10(c: &mut criterion::Criterion) {
    let mut seed = 0;
    c.bench_function("play a random 10-player game", |b| {
        b.iter(|| {
            seed += 1;
            play(10, seed)
        })
    });
}

fn listing_legal_intents(c: &mut criterion::Criterion) {
    let mut room = seated_room(10, 1);
    let mut rng = GameRng::new(1);
    // Start, nominate: leaves the room mid-vote with every seat able to act.
    play_out(&mut room, &RandomBot, &mut rng, 2).expect("legal intents are accepted");
    let seats: Vec<_> = room.roster().iter().map(|p| p.id).collect();
    c.bench_function("list legal intents for 10 seats", |b| {
        b.iter(|| seats.iter().map(|&p| room.legal_intents(p).len()).sum::<usize>())
    });
}
