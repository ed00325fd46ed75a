//! Match format configuration.

use super::types::MAX_SETS;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Longest set a format may ask for.
pub const MAX_GAMES_PER_SET: u8 = 12;

/// Rules a match is scored under.
///
/// The defaults are a best-of-five match with standard sets and a
/// seven point tie-break at six games all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchFormat {
    /// Number of set slots played at most (odd, 1-5).
    #[serde(default = "default_sets")]
    sets: u8,

    /// Sets needed to win the match.
    #[serde(default = "default_sets_to_win")]
    sets_to_win: u8,

    /// Games needed to take a set with a two game lead.
    #[serde(default = "default_games_per_set")]
    games_per_set: u8,

    /// Points needed to take a tie-break with a two point lead.
    #[serde(default = "default_tie_break_points")]
    tie_break_points: u8,

    /// First to this many tie-break points wins regardless of lead.
    #[serde(default = "default_tie_break_cap")]
    tie_break_cap: u8,
}

#[instrument]
fn default_sets() -> u8 {
    MAX_SETS as u8
}

#[instrument]
fn default_sets_to_win() -> u8 {
    3
}

#[instrument]
fn default_games_per_set() -> u8 {
    6
}

#[instrument]
fn default_tie_break_points() -> u8 {
    7
}

#[instrument]
fn default_tie_break_cap() -> u8 {
    10
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self {
            sets: default_sets(),
            sets_to_win: default_sets_to_win(),
            games_per_set: default_games_per_set(),
            tie_break_points: default_tie_break_points(),
            tie_break_cap: default_tie_break_cap(),
        }
    }
}

impl MatchFormat {
    /// Creates a best-of-`sets` format with standard set and tie-break rules.
    #[instrument]
    pub fn best_of(sets: u8) -> Result<Self, ConfigError> {
        Self {
            sets,
            sets_to_win: sets / 2 + 1,
            ..Self::default()
        }
        .validated()
    }

    /// Overrides the tie-break target and cap.
    #[instrument(skip(self))]
    pub fn with_tie_break(self, points: u8, cap: u8) -> Result<Self, ConfigError> {
        Self {
            tie_break_points: points,
            tie_break_cap: cap,
            ..self
        }
        .validated()
    }

    /// Loads a format from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match format from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let format = Self::from_toml(&content)?;
        info!(sets = format.sets, sets_to_win = format.sets_to_win, "Match format loaded");
        Ok(format)
    }

    /// Parses a format from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let format: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        format.validated()
    }

    /// Checks the format is playable.
    #[instrument]
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.sets == 0 || usize::from(self.sets) > MAX_SETS {
            return Err(ConfigError::new(format!(
                "sets must be between 1 and {}, got {}",
                MAX_SETS, self.sets
            )));
        }
        if self.sets % 2 == 0 {
            return Err(ConfigError::new(format!(
                "sets must be odd so the match cannot end level, got {}",
                self.sets
            )));
        }
        if self.sets_to_win <= self.sets / 2 || self.sets_to_win > self.sets {
            return Err(ConfigError::new(format!(
                "sets_to_win must be between {} and {}, got {}",
                self.sets / 2 + 1,
                self.sets,
                self.sets_to_win
            )));
        }
        if self.games_per_set == 0 || self.games_per_set > MAX_GAMES_PER_SET {
            return Err(ConfigError::new(format!(
                "games_per_set must be between 1 and {}, got {}",
                MAX_GAMES_PER_SET, self.games_per_set
            )));
        }
        if self.tie_break_points == 0 {
            return Err(ConfigError::new("tie_break_points must be positive".to_string()));
        }
        if self.tie_break_cap < self.tie_break_points {
            return Err(ConfigError::new(format!(
                "tie_break_cap ({}) must be at least tie_break_points ({})",
                self.tie_break_cap, self.tie_break_points
            )));
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
