//! Strictly Scoreboard - terminal front end for the tennis match engine.

#![warn(missing_docs)]

mod board;
mod cli;
mod input;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use input::Input;
use std::io::BufRead;
use strictly_tennis::{ElapsedTime, MatchEngine, MatchFormat, MatchSummary, UptimeClock};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let format = load_format(cli.config.as_deref())?;

    match cli.command {
        Command::Play => run_play(format),
        Command::Replay { points, json } => run_replay(format, &points, json),
    }
}

/// Loads the match format from a config file, or the default.
#[instrument]
fn load_format(path: Option<&std::path::Path>) -> Result<MatchFormat> {
    match path {
        Some(path) => MatchFormat::from_file(path)
            .with_context(|| format!("Loading match format from {}", path.display())),
        None => {
            debug!("No config given, using best of five");
            Ok(MatchFormat::default())
        }
    }
}

/// Scores a match interactively from stdin.
#[instrument]
fn run_play(format: MatchFormat) -> Result<()> {
    let mut engine = MatchEngine::with_format(format);
    let clock = UptimeClock::new();
    let started = ElapsedTime::start(&clock);

    info!("Scoreboard ready");
    println!("{}", board::render_board(&engine.summary(), Some(&started.display(&clock))));

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Reading input")?;

        match input::parse_input(&line) {
            Some(Input::Point(player)) => {
                engine.register_point(player);
                info!(?player, points = engine.point_count(), "Point registered");
            }
            Some(Input::Undo) => engine.undo(),
            Some(Input::Quit) => break,
            None => {
                warn!(input = %line.trim(), "Unrecognized input");
                println!("Commands: 1, 2, u (undo), q (quit)");
                continue;
            }
        }

        println!("{}", board::render_board(&engine.summary(), Some(&started.display(&clock))));
    }

    Ok(())
}

/// Scores a point string such as `"11212"` and returns the final summary.
#[instrument(skip(points))]
fn replay_points(format: MatchFormat, points: &str) -> Result<MatchSummary> {
    let mut engine = MatchEngine::with_format(format);
    for player in input::parse_points(points)? {
        engine.register_point(player);
    }
    debug!(points = engine.point_count(), "Replay complete");
    Ok(engine.summary())
}

/// Replays a point sequence and prints the final board.
#[instrument(skip(points))]
fn run_replay(format: MatchFormat, points: &str, json: bool) -> Result<()> {
    let summary = replay_points(format, points)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", board::render_board(&summary, None));
    }

    Ok(())
}
