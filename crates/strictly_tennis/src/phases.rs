//! Match outcome for the finished phase.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Player who took the match.
    pub winner: Player,
    /// Sets won by (player one, player two).
    pub sets_won: (u8, u8),
}

impl MatchOutcome {
    /// Returns the match winner.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the set score from the winner's side, e.g. `(3, 1)`.
    pub fn winner_sets(&self) -> (u8, u8) {
        (
            self.winner.of(self.sets_won),
            self.winner.opponent().of(self.sets_won),
        )
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (won, lost) = self.winner_sets();
        write!(f, "{} wins {}-{}", self.winner, won, lost)
    }
}
