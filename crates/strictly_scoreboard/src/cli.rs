//! Command-line interface for strictly_scoreboard.

use clap::{Parser, Subcommand};

/// Strictly Scoreboard - terminal tennis scoreboard
#[derive(Parser, Debug)]
#[command(name = "strictly_scoreboard")]
#[command(about = "Track a tennis match point by point", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a match format TOML file (defaults to best of five)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a match interactively: `1` / `2` award a point, `u` undoes, `q` quits
    Play,

    /// Replay a sequence of points and print the final board
    Replay {
        /// Point winners as a string of `1` and `2`, e.g. `1112`
        points: String,

        /// Print the summary as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
