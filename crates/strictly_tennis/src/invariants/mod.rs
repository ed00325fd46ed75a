//! First-class invariants for a tennis match.
//!
//! Invariants are logical properties of a match summary that must hold
//! after every point. They are checked in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        collect(violations)
    }
}

pub mod game_score_consistent;
pub mod set_score_bounded;
pub mod set_tally;
pub mod single_active_set;

pub use game_score_consistent::GameScoreConsistentInvariant;
pub use set_score_bounded::SetScoreBoundedInvariant;
pub use set_tally::SetTallyInvariant;
pub use single_active_set::SingleActiveSetInvariant;

/// All tennis invariants as a composable set.
pub type TennisInvariants = (
    SingleActiveSetInvariant,
    GameScoreConsistentInvariant,
    SetScoreBoundedInvariant,
    SetTallyInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchFormat, MatchInProgress, Player, Point};

    #[test]
    fn test_invariant_set_holds_for_fresh_match() {
        let summary = MatchInProgress::new(MatchFormat::default()).summary();
        assert!(TennisInvariants::check_all(&summary).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_set() {
        let points: Vec<Point> = std::iter::repeat_n(Point::new(Player::Two), 30).collect();
        let summary = MatchInProgress::replay(MatchFormat::default(), &points).summary();

        assert_eq!(summary.current_set, 1);
        assert!(TennisInvariants::check_all(&summary).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut summary = MatchInProgress::new(MatchFormat::default()).summary();
        summary.sets[0].active = false;
        summary.sets_won = (1, 0);

        let violations = TennisInvariants::check_all(&summary).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let summary = MatchInProgress::new(MatchFormat::default()).summary();

        type TwoInvariants = (SingleActiveSetInvariant, GameScoreConsistentInvariant);
        assert!(TwoInvariants::check_all(&summary).is_ok());
    }
}
