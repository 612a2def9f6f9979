//! Brick Breaker headless runner
//!
//! Generates a level, lets the autopilot play it and prints a JSON summary.
//!
//! Usage: `brick-breaker [seed] [rules.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use brick_breaker::sim::autopilot;
use brick_breaker::{GameError, LevelConfig, Rules, generate_level};

/// Safety cap so a ball stuck in a loop can't run forever
const MAX_TICKS: u64 = 20_000;
/// Elapsed time per simulated frame
const FRAME_ELAPSED: i32 = 1;

/// Play a generated level with the autopilot and print a JSON summary
#[derive(Debug, Parser)]
#[command(name = "brick-breaker", version)]
struct Args {
    /// Level seed
    #[arg(default_value_t = 0)]
    seed: u64,
    /// JSON file overriding the default rules
    rules: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    outcome: &'static str,
    balls: usize,
    blocks: usize,
}

fn load_rules(path: Option<&PathBuf>) -> Result<Rules, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(Rules::from_json(&json)?)
        }
        None => Ok(Rules::default()),
    }
}

fn run(seed: u64, rules: Rules) -> Result<RunSummary, GameError> {
    let mut state = generate_level(seed, &LevelConfig::default(), rules)?;

    while state.time_ticks() < MAX_TICKS && !state.is_won() && !state.is_dead() {
        let direction = autopilot::steer(&state);
        state.steer_paddle(FRAME_ELAPSED, direction);
        state.tick(FRAME_ELAPSED, direction);
    }

    let outcome = if state.is_won() {
        "won"
    } else if state.is_dead() {
        "lost"
    } else {
        "timeout"
    };
    log::info!("Run {} finished: {} after {} ticks", seed, outcome, state.time_ticks());

    Ok(RunSummary {
        seed,
        ticks: state.time_ticks(),
        outcome,
        balls: state.balls().len(),
        blocks: state.blocks().len(),
    })
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let rules = match load_rules(args.rules.as_ref()) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("could not load rules: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(args.seed, rules) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("could not encode summary: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("could not build level: {err}");
            ExitCode::FAILURE
        }
    }
}
