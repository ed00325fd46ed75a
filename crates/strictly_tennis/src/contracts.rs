//! Contract-based validation for point scoring.
//!
//! Contracts define correctness through preconditions and postconditions
//! over match summaries: {P} point {Q}.

use super::action::Point;
use super::invariants::{InvariantSet, TennisInvariants};
use super::MatchSummary;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ContractViolation>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// Reason a contract did not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ContractViolation {
    /// The match already has a winner.
    #[display("Match is already over")]
    MatchOver,

    /// A finished set changed after it was frozen.
    #[display("Finished set {} was modified", _0)]
    FinishedSetChanged(#[error(not(source))] usize),

    /// More than one game was credited by a single point.
    #[display("Games jumped from {} to {} on one point", before, after)]
    GamesJumped {
        /// Total games before the point.
        before: u32,
        /// Total games after the point.
        after: u32,
    },

    /// An invariant was violated.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match must still be in play.
pub struct MatchInPlay;

impl MatchInPlay {
    /// Fails once the match has a winner.
    #[instrument(skip(summary))]
    pub fn check(summary: &MatchSummary) -> Result<(), ContractViolation> {
        if summary.is_finished() {
            Err(ContractViolation::MatchOver)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: sets finished before the point are untouched after it.
pub struct FinishedSetsFrozen;

impl FinishedSetsFrozen {
    /// Compares every set that was finished in `before`.
    #[instrument(skip(before, after))]
    pub fn check(before: &MatchSummary, after: &MatchSummary) -> Result<(), ContractViolation> {
        for (index, (old, new)) in before.sets.iter().zip(after.sets.iter()).enumerate() {
            if old.is_finished() && old != new {
                warn!(set = index, "Finished set changed");
                return Err(ContractViolation::FinishedSetChanged(index));
            }
        }
        Ok(())
    }
}

/// Postcondition: a point credits at most one game.
pub struct SingleGameStep;

impl SingleGameStep {
    fn total_games(summary: &MatchSummary) -> u32 {
        summary
            .sets
            .iter()
            .map(|set| u32::from(set.games_won.0) + u32::from(set.games_won.1))
            .sum()
    }

    /// Compares total games credited across all sets.
    #[instrument(skip(before, after))]
    pub fn check(before: &MatchSummary, after: &MatchSummary) -> Result<(), ContractViolation> {
        let before = Self::total_games(before);
        let after = Self::total_games(after);
        if after == before || after == before + 1 {
            Ok(())
        } else {
            Err(ContractViolation::GamesJumped { before, after })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Point Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for scoring a point.
///
/// Preconditions:
/// - Match has no winner yet
///
/// Postconditions:
/// - Finished sets are frozen
/// - At most one game is credited
/// - All tennis invariants hold
pub struct PointContract;

impl Contract<MatchSummary, Point> for PointContract {
    fn pre(summary: &MatchSummary, _point: &Point) -> Result<(), ContractViolation> {
        MatchInPlay::check(summary)
    }

    fn post(before: &MatchSummary, after: &MatchSummary) -> Result<(), ContractViolation> {
        FinishedSetsFrozen::check(before, after)?;
        SingleGameStep::check(before, after)?;
        TennisInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
