//! Set tally invariant: sets won matches the finished sets.

use super::super::{MatchSummary, Player};
use super::Invariant;

/// Invariant: `sets_won` counts the finished sets of each player.
pub struct SetTallyInvariant;

impl Invariant<MatchSummary> for SetTallyInvariant {
    fn holds(summary: &MatchSummary) -> bool {
        let count = |player: Player| {
            summary
                .sets
                .iter()
                .filter(|set| set.winner == Some(player))
                .count()
        };

        usize::from(summary.sets_won.0) == count(Player::One)
            && usize::from(summary.sets_won.1) == count(Player::Two)
    }

    fn description() -> &'static str {
        "Sets won equals the number of finished sets per player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchFormat, MatchInProgress, Point};

    #[test]
    fn test_tally_after_one_set() {
        let points = vec![Point::new(Player::Two); 24];
        let summary = MatchInProgress::replay(MatchFormat::default(), &points).summary();

        assert_eq!(summary.sets_won, (0, 1));
        assert!(SetTallyInvariant::holds(&summary));
    }

    #[test]
    fn test_inflated_tally_violates() {
        let mut summary = MatchInProgress::new(MatchFormat::default()).summary();
        summary.sets_won = (0, 1);
        assert!(!SetTallyInvariant::holds(&summary));
    }
}
