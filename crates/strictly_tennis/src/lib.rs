//! Strictly Tennis - pure tennis match scoring.
//!
//! This crate resolves a stream of point-won events into game, set and
//! tie-break scores for a two-player match.
//!
//! # Architecture
//!
//! - **Rules**: pure functions for game, set, tie-break and match completion
//! - **Typestate**: `MatchInProgress` accepts points, `MatchFinished` carries the outcome
//! - **Contracts**: postconditions checked after every point in debug builds
//! - **Engine**: `MatchEngine` owns the point history and supports undo
//!
//! # Example
//!
//! ```
//! use strictly_tennis::{GameScore, MatchEngine, Player};
//!
//! let mut engine = MatchEngine::new();
//! engine.register_point(Player::One);
//! engine.register_point(Player::One);
//! assert_eq!(engine.summary().game, (GameScore::Thirty, GameScore::Love));
//!
//! engine.undo();
//! assert_eq!(engine.summary().game, (GameScore::Fifteen, GameScore::Love));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod clock;
mod config;
mod engine;
mod phases;
mod types;
mod typestate;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Point;
pub use clock::{ElapsedTime, MatchClock, UptimeClock, format_elapsed};
pub use config::{ConfigError, MAX_GAMES_PER_SET, MatchFormat};
pub use contracts::{Contract, ContractViolation, PointContract};
pub use engine::MatchEngine;
pub use phases::MatchOutcome;
pub use types::{GameScore, MAX_SETS, MatchSummary, Player, SetState, format_game_score};
pub use typestate::{MatchFinished, MatchInProgress, MatchProgress};
