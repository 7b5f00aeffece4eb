//! Headless Simulator
//!
//! Plays whole games between random bots through the room registry and
//! prints a win summary. Useful for smoke-testing rule variants.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hidden_ballot::core::{GameRng, Intent};
use hidden_ballot::sim::{play_out_in_registry, RandomBot};
use hidden_ballot::{Alignment, GameResult, RoomConfig, RoomRegistry, PlayerId};
use rustc_hash::FxHashMap;

/// Headless Simulator - random bots play full games
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Play random-bot games and report how they ended")]
struct Args {
    /// Players per game (5-10)
    #[arg(long, short = 'p', default_value_t = 7)]
    players: usize,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    games: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Room rules as TOML; missing keys take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Intents allowed per game before giving up
    #[arg(long, default_value_t = 5_000)]
    max_steps: usize,
}

fn load_config(args: &Args) -> Result<RoomConfig, String> {
    let config = match &args.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            RoomConfig::from_toml_str(&source).map_err(|e| e.to_string())?
        }
        None => RoomConfig::default(),
    };
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    Ok(config.with_seed(seed))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hidden_ballot=info")),
        )
        .init();

    let args = Args::parse();
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let seed = config.seed.unwrap_or_default();

    let mut registry = match RoomRegistry::new(config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut bot_rng = GameRng::new(seed).for_context("bots");

    let mut results: FxHashMap<GameResult, usize> = FxHashMap::default();
    let mut unfinished = 0;
    let mut total_rounds = 0u64;

    for game in 0..args.games {
        let base = (game * args.players) as u64;
        let host = PlayerId::new(base);
        let (code, _) = match registry.create_room(host, "Bot0") {
            Ok(created) => created,
            Err(e) => {
                eprintln!("game {}: {}", game, e);
                return ExitCode::FAILURE;
            }
        };
        for i in 1..args.players {
            let joined = registry.handle(
                code.as_str(),
                PlayerId::new(base + i as u64),
                Intent::Join { name: format!("Bot{}", i) },
            );
            if let Err(e) = joined {
                eprintln!("game {}: {}", game, e);
                return ExitCode::FAILURE;
            }
        }

        match play_out_in_registry(&mut registry, &code, &RandomBot, &mut bot_rng, args.max_steps) {
            Ok(playout) => match playout.result {
                Some(result) => {
                    total_rounds += u64::from(playout.rounds);
                    *results.entry(result).or_default() += 1;
                }
                None => unfinished += 1,
            },
            Err(e) => {
                eprintln!("game {}: {}", game, e);
                unfinished += 1;
            }
        }
        // A game cut off by the step limit still holds its seats.
        if registry.room(&code).is_some() {
            for i in 0..args.players {
                registry.disconnect(PlayerId::new(base + i as u64));
            }
        }
    }

    let finished = args.games - unfinished;
    let wins = |side: Alignment| -> usize {
        results
            .iter()
            .filter(|(r, _)| r.is_winner(side))
            .map(|(_, n)| n)
            .sum()
    };

    println!("=== {} games, {} players, seed {} ===", args.games, args.players, seed);
    println!("protagonist wins: {}", wins(Alignment::Protagonist));
    println!("antagonist wins:  {}", wins(Alignment::Antagonist));
    let mut breakdown: Vec<_> = results.into_iter().collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1));
    for (result, count) in breakdown {
        println!("  {:?}: {}", result, count);
    }
    if finished > 0 {
        println!("mean rounds: {:.1}", total_rounds as f64 / finished as f64);
    }
    if unfinished > 0 {
        println!("unfinished: {}", unfinished);
    }
    ExitCode::SUCCESS
}
