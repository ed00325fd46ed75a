//! Set ordering invariant: one active set, activated strictly in order.

use super::super::MatchSummary;
use super::Invariant;

/// Invariant: exactly one set is active while the match is in play, none after.
///
/// Every set before the active one is finished and every set after it
/// has not started.
pub struct SingleActiveSetInvariant;

impl Invariant<MatchSummary> for SingleActiveSetInvariant {
    fn holds(summary: &MatchSummary) -> bool {
        let active = summary.sets.iter().filter(|set| set.active).count();
        let current = summary.current_set;

        if summary.is_finished() {
            return active == 0
                && summary.sets[..=current].iter().all(|set| set.is_finished())
                && summary.sets[current + 1..].iter().all(|set| set.is_pending());
        }

        active == 1
            && summary.sets[current].active
            && summary.sets[..current].iter().all(|set| set.is_finished())
            && summary.sets[current + 1..].iter().all(|set| set.is_pending())
    }

    fn description() -> &'static str {
        "Exactly one set is active and sets are played in order"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchFormat, MatchInProgress, Player, Point};

    #[test]
    fn test_fresh_match_holds() {
        let summary = MatchInProgress::new(MatchFormat::default()).summary();
        assert!(SingleActiveSetInvariant::holds(&summary));
    }

    #[test]
    fn test_finished_match_holds() {
        let points = vec![Point::new(Player::One); 72];
        let summary = MatchInProgress::replay(MatchFormat::default(), &points).summary();

        assert!(summary.is_finished());
        assert_eq!(summary.current_set, 2);
        assert!(SingleActiveSetInvariant::holds(&summary));
    }

    #[test]
    fn test_two_active_sets_violate() {
        let mut summary = MatchInProgress::new(MatchFormat::default()).summary();
        summary.sets[2].active = true;
        assert!(!SingleActiveSetInvariant::holds(&summary));
    }

    #[test]
    fn test_skipped_set_violates() {
        let mut summary = MatchInProgress::new(MatchFormat::default()).summary();
        summary.sets[0].active = false;
        summary.sets[1].active = true;
        summary.current_set = 1;
        assert!(!SingleActiveSetInvariant::holds(&summary));
    }
}
