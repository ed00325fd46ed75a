//! Match completion.

use super::super::{MatchFormat, Player};
use tracing::instrument;

/// Returns the match winner, if the sets won decide it.
///
/// The match ends when a player reaches `sets_to_win`. It also ends when
/// every configured set has been played, in which case the player with
/// more sets takes it.
#[instrument(skip(format))]
pub fn match_winner(sets_won: (u8, u8), format: &MatchFormat) -> Option<Player> {
    let (one, two) = sets_won;
    let to_win = *format.sets_to_win();

    if one >= to_win {
        return Some(Player::One);
    }
    if two >= to_win {
        return Some(Player::Two);
    }
    if one + two >= *format.sets() {
        return match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_sets_win_best_of_five() {
        let format = MatchFormat::default();
        assert_eq!(match_winner((3, 1), &format), Some(Player::One));
        assert_eq!(match_winner((2, 3), &format), Some(Player::Two));
    }

    #[test]
    fn test_undecided() {
        let format = MatchFormat::default();
        assert_eq!(match_winner((2, 2), &format), None);
        assert_eq!(match_winner((0, 0), &format), None);
    }

    #[test]
    fn test_single_set_match() {
        let format = MatchFormat::best_of(1).unwrap();
        assert_eq!(match_winner((0, 1), &format), Some(Player::Two));
    }
}
