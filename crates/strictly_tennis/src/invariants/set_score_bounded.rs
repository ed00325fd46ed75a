//! Set score invariant: game counts respect the completion rule.

use super::super::rules::{SetTransition, evaluate_set, tie_break_winner};
use super::super::{MatchFormat, MatchSummary, Player, SetState};
use super::Invariant;

/// Invariant: every set's games agree with its status.
///
/// - pending sets are blank
/// - active sets are undecided, and in a tie-break exactly at games-all
/// - finished sets were won by the recorded winner, either outright or
///   by a decided tie-break recorded one game clear
pub struct SetScoreBoundedInvariant;

fn set_consistent(set: &SetState, format: &MatchFormat) -> bool {
    let level = *format.games_per_set();

    if set.is_pending() {
        return *set == SetState::default();
    }

    if set.active {
        if set.tie_break_active {
            return set.games_won == (level, level)
                && tie_break_winner(set.tie_break_points, format).is_none();
        }
        return set.tie_break_points == (0, 0)
            && evaluate_set(set.games_won, format) == SetTransition::Continue;
    }

    let Some(winner) = set.winner else {
        return false;
    };
    if set.tie_break_active {
        return false;
    }
    if set.tie_break_points == (0, 0) {
        return evaluate_set(set.games_won, format) == SetTransition::Won(winner);
    }

    let recorded = match winner {
        Player::One => (level.saturating_add(1), level),
        Player::Two => (level, level.saturating_add(1)),
    };
    set.games_won == recorded && tie_break_winner(set.tie_break_points, format) == Some(winner)
}

impl Invariant<MatchSummary> for SetScoreBoundedInvariant {
    fn holds(summary: &MatchSummary) -> bool {
        summary
            .sets
            .iter()
            .all(|set| set_consistent(set, &summary.format))
    }

    fn description() -> &'static str {
        "Set game counts match the set completion rule"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchInProgress;

    fn fresh() -> MatchSummary {
        MatchInProgress::new(MatchFormat::default()).summary()
    }

    #[test]
    fn test_fresh_match_holds() {
        assert!(SetScoreBoundedInvariant::holds(&fresh()));
    }

    #[test]
    fn test_active_set_past_completion_violates() {
        let mut summary = fresh();
        summary.sets[0].games_won = (6, 2);
        assert!(!SetScoreBoundedInvariant::holds(&summary));
    }

    #[test]
    fn test_tie_break_before_six_all_violates() {
        let mut summary = fresh();
        summary.sets[0].games_won = (6, 5);
        summary.sets[0].tie_break_active = true;
        assert!(!SetScoreBoundedInvariant::holds(&summary));
    }

    #[test]
    fn test_finished_by_tie_break_holds() {
        let mut summary = fresh();
        summary.sets[0] = SetState {
            active: false,
            games_won: (7, 6),
            tie_break_active: false,
            tie_break_points: (7, 5),
            winner: Some(Player::One),
        };
        summary.sets[1].active = true;
        assert!(SetScoreBoundedInvariant::holds(&summary));
    }

    #[test]
    fn test_wrong_recorded_winner_violates() {
        let mut summary = fresh();
        summary.sets[0] = SetState {
            active: false,
            games_won: (6, 3),
            tie_break_active: false,
            tie_break_points: (0, 0),
            winner: Some(Player::Two),
        };
        assert!(!SetScoreBoundedInvariant::holds(&summary));
    }
}
