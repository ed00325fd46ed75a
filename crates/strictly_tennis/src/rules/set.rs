//! Set completion and tie-break entry.

use super::super::{MatchFormat, Player};
use tracing::instrument;

/// State of a set after a game has been credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetTransition {
    /// More games are needed.
    Continue,
    /// Games are level at the set length; a tie-break decides the set.
    TieBreak,
    /// The player has won the set.
    Won(Player),
}

/// Evaluates a set from its (player one, player two) game counts.
///
/// A set is won on reaching `games_per_set` with a two game lead, which
/// covers 6-4 and 7-5 alike. Level at `games_per_set` enters a tie-break.
#[instrument(skip(format))]
pub fn evaluate_set(games: (u8, u8), format: &MatchFormat) -> SetTransition {
    let target = *format.games_per_set();
    let (one, two) = games;

    if one == target && two == target {
        return SetTransition::TieBreak;
    }
    if one >= target && one >= two.saturating_add(2) {
        return SetTransition::Won(Player::One);
    }
    if two >= target && two >= one.saturating_add(2) {
        return SetTransition::Won(Player::Two);
    }
    SetTransition::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_four_wins() {
        let format = MatchFormat::default();
        assert_eq!(evaluate_set((6, 4), &format), SetTransition::Won(Player::One));
        assert_eq!(evaluate_set((0, 6), &format), SetTransition::Won(Player::Two));
    }

    #[test]
    fn test_six_five_continues() {
        let format = MatchFormat::default();
        assert_eq!(evaluate_set((6, 5), &format), SetTransition::Continue);
        assert_eq!(evaluate_set((5, 5), &format), SetTransition::Continue);
    }

    #[test]
    fn test_seven_five_wins() {
        let format = MatchFormat::default();
        assert_eq!(evaluate_set((7, 5), &format), SetTransition::Won(Player::One));
        assert_eq!(evaluate_set((5, 7), &format), SetTransition::Won(Player::Two));
    }

    #[test]
    fn test_six_all_enters_tie_break() {
        let format = MatchFormat::default();
        assert_eq!(evaluate_set((6, 6), &format), SetTransition::TieBreak);
    }

    #[test]
    fn test_counts_near_u8_max_do_not_overflow() {
        let format = MatchFormat::default();
        assert_eq!(evaluate_set((255, 254), &format), SetTransition::Continue);
        assert_eq!(evaluate_set((254, 255), &format), SetTransition::Continue);
        assert_eq!(evaluate_set((255, 253), &format), SetTransition::Won(Player::One));
    }
}
