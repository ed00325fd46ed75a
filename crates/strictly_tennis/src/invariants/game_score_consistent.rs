//! Game score consistency invariant.

use super::super::{GameScore, MatchSummary};
use super::Invariant;

/// Invariant: the game score is a reachable tennis score.
///
/// Advantage is held by at most one player and only against Forty.
/// While a tie-break is in play, or once the match is over, both
/// players show Love.
pub struct GameScoreConsistentInvariant;

impl Invariant<MatchSummary> for GameScoreConsistentInvariant {
    fn holds(summary: &MatchSummary) -> bool {
        let idle = summary.is_finished()
            || summary.active_set().is_some_and(|set| set.tie_break_active);
        if idle {
            return summary.game == (GameScore::Love, GameScore::Love);
        }

        match summary.game {
            (GameScore::Advantage, other) | (other, GameScore::Advantage) => {
                other == GameScore::Forty
            }
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Advantage only against Forty, and no game score during a tie-break"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchFormat, MatchInProgress};

    fn with_game(game: (GameScore, GameScore)) -> MatchSummary {
        let mut summary = MatchInProgress::new(MatchFormat::default()).summary();
        summary.game = game;
        summary
    }

    #[test]
    fn test_deuce_and_advantage_hold() {
        assert!(GameScoreConsistentInvariant::holds(&with_game((
            GameScore::Forty,
            GameScore::Forty
        ))));
        assert!(GameScoreConsistentInvariant::holds(&with_game((
            GameScore::Forty,
            GameScore::Advantage
        ))));
    }

    #[test]
    fn test_advantage_against_thirty_violates() {
        assert!(!GameScoreConsistentInvariant::holds(&with_game((
            GameScore::Advantage,
            GameScore::Thirty
        ))));
    }

    #[test]
    fn test_double_advantage_violates() {
        assert!(!GameScoreConsistentInvariant::holds(&with_game((
            GameScore::Advantage,
            GameScore::Advantage
        ))));
    }

    #[test]
    fn test_game_score_in_tie_break_violates() {
        let mut summary = with_game((GameScore::Fifteen, GameScore::Love));
        summary.sets[0].games_won = (6, 6);
        summary.sets[0].tie_break_active = true;
        assert!(!GameScoreConsistentInvariant::holds(&summary));
    }
}
