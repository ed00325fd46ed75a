//! Point-by-point game scoring.

use super::super::GameScore;
use tracing::instrument;

/// Result of applying one point to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTransition {
    /// The game continues with new (scorer, opponent) scores.
    Continue(GameScore, GameScore),
    /// The scorer has won the game.
    Won,
}

/// Applies a point won by `scorer` against `opponent`.
///
/// Deuce is both players at `Forty`. Losing a point while the opponent
/// holds `Advantage` goes back to deuce, never below it.
#[instrument]
pub fn score_game_point(scorer: GameScore, opponent: GameScore) -> GameTransition {
    use GameScore::*;

    match (scorer, opponent) {
        (Love, _) => GameTransition::Continue(Fifteen, opponent),
        (Fifteen, _) => GameTransition::Continue(Thirty, opponent),
        (Thirty, _) => GameTransition::Continue(Forty, opponent),
        (Forty, Advantage) => GameTransition::Continue(Forty, Forty),
        (Forty, Forty) => GameTransition::Continue(Advantage, Forty),
        (Forty, Love | Fifteen | Thirty) => GameTransition::Won,
        (Advantage, _) => GameTransition::Won,
    }
}
