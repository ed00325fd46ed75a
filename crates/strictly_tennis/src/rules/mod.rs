//! Scoring rules for tennis.
//!
//! This module contains pure functions for resolving points into games,
//! games into sets and sets into a match. Rules are kept apart from the
//! match state so the contract layer can reason about them directly.

pub mod game;
pub mod outcome;
pub mod set;
pub mod tie_break;

pub use game::{GameTransition, score_game_point};
pub use outcome::match_winner;
pub use set::{SetTransition, evaluate_set};
pub use tie_break::tie_break_winner;
