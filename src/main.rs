//! Space Dodge entry point
//!
//! Headless host: drives a session with a scripted pilot, logs progress and
//! prints the final frame as JSON. Rendering and keyboard wiring belong to a
//! presentation shell that is not part of this crate.

use std::path::PathBuf;

use clap::Parser;

use space_dodge::consts::TICK_MILLIS;
use space_dodge::sim::{Difficulty, GameEvent};
use space_dodge::{Direction, InputEvent, Session, Settings};

/// Ticks per logged progress line (~1 second of play)
const REPORT_INTERVAL: u64 = 1000 / TICK_MILLIS;

#[derive(Parser, Debug)]
#[command(name = "space-dodge")]
#[command(about = "Play a headless Space Dodge round with a scripted pilot")]
struct Args {
    /// Difficulty: easy, normal or hard (overrides the config file)
    #[arg(short, long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum ticks to simulate
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_difficulty(name: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(name).ok_or_else(|| format!("unknown difficulty: {name}"))
}

/// Scripted pilot: sweeps left and right, firing every few ticks
fn pilot_inputs(tick: u64) -> Vec<InputEvent> {
    let mut events = Vec::new();
    match tick % 120 {
        0 => events.push(InputEvent::KeyDown(Direction::Left)),
        30 => events.push(InputEvent::KeyUp(Direction::Left)),
        60 => events.push(InputEvent::KeyDown(Direction::Right)),
        90 => events.push(InputEvent::KeyUp(Direction::Right)),
        _ => {}
    }
    if tick % 6 == 0 {
        events.push(InputEvent::Fire);
    }
    events
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut settings = args
        .config
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    log::info!("Space Dodge (headless) starting...");
    let mut session = Session::new(&settings);

    for t in 0..args.ticks {
        for event in pilot_inputs(t) {
            session.handle(event);
        }
        for event in session.advance() {
            match event {
                GameEvent::ShipDestroyed { .. } => {}
                other => log::debug!("tick {t}: {other:?}"),
            }
        }
        if session.is_over() {
            break;
        }
        if (t + 1) % REPORT_INTERVAL == 0 {
            let world = session.world();
            log::info!(
                "tick {}: score {}, {} enemies, {} projectiles",
                world.time_ticks,
                world.score,
                world.enemies.len(),
                world.projectiles.len()
            );
        }
    }

    let snapshot = session.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }
    match snapshot.game_over_message() {
        Some(msg) => println!("{msg}"),
        None => println!("Survived {} ticks, score {}", args.ticks, snapshot.score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["space-dodge"]).unwrap();
        assert_eq!(args.difficulty, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.ticks, 3600);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_all_flags() {
        let args = Args::try_parse_from([
            "space-dodge",
            "--difficulty",
            "HARD",
            "--seed",
            "42",
            "--ticks",
            "10",
            "--config",
            "settings.json",
        ])
        .unwrap();
        assert_eq!(args.difficulty, Some(Difficulty::Hard));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.ticks, 10);
        assert_eq!(args.config, Some(PathBuf::from("settings.json")));
    }

    #[test]
    fn test_args_reject_unknown_difficulty() {
        assert!(Args::try_parse_from(["space-dodge", "--difficulty", "insane"]).is_err());
        assert!(Args::try_parse_from(["space-dodge", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_pilot_fires_and_sweeps() {
        assert_eq!(
            pilot_inputs(0),
            vec![InputEvent::KeyDown(Direction::Left), InputEvent::Fire]
        );
        assert_eq!(pilot_inputs(30), vec![InputEvent::KeyUp(Direction::Left)]);
        assert!(pilot_inputs(7).is_empty());
    }
}
