//! Jumping Game entry point
//!
//! There is no window backend in this crate; the native binary runs a
//! headless demo match through the real game loop and logs the result.
//!
//! Usage: `jumping-game [--realtime] [settings.json] [seed] [rounds]`
//!
//! `--realtime` paces the demo at the configured tick rate instead of
//! running as fast as possible.

use std::path::PathBuf;

use jumping_game::demo::DemoPlatform;
use jumping_game::{GameLoop, Settings};

/// Upper bound on demo length (about ten minutes of play at 27 ticks/s)
const DEMO_MAX_TICKS: u64 = 27 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Jumping Game (headless) starting...");

    let (flags, positional): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|a| a.starts_with("--"));
    let realtime = flags.iter().any(|f| f == "--realtime");
    for flag in flags.iter().filter(|f| *f != "--realtime") {
        log::warn!("Unknown flag {}", flag);
    }

    let mut args = positional.into_iter();
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let seed = parse_arg(args.next(), "seed", 27);
    let rounds = parse_arg(args.next(), "rounds", 3);

    let settings = Settings::load(&settings_path);
    let names = ["Player 1".to_string(), "Player 2".to_string()];
    let mut game = GameLoop::with_names(settings, names);
    let mut platform = DemoPlatform::new(seed, rounds, DEMO_MAX_TICKS).realtime(realtime);

    log::info!(
        "Demo seed {}, {} round(s), realtime {}",
        seed,
        rounds,
        realtime
    );
    game.run(&mut platform);

    let names = game.names();
    for (i, side) in platform.results.iter().enumerate() {
        println!("Round {}: {} wins", i + 1, names[side.index()]);
    }
    if platform.results.is_empty() {
        println!("No round finished within {} ticks", DEMO_MAX_TICKS);
    }
}

fn parse_arg<T: std::str::FromStr + Copy + std::fmt::Display>(
    arg: Option<String>,
    name: &str,
    default: T,
) -> T {
    match arg.map(|a| a.parse::<T>()) {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            log::warn!("Could not parse {}, using {}", name, default);
            default
        }
    }
}
