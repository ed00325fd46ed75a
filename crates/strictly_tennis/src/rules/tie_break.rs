//! Tie-break completion.

use super::super::{MatchFormat, Player};
use tracing::instrument;

/// Returns the tie-break winner, if the points decide it.
///
/// A tie-break needs `tie_break_points` with a two point lead. The first
/// player to reach `tie_break_cap` wins outright.
#[instrument(skip(format))]
pub fn tie_break_winner(points: (u8, u8), format: &MatchFormat) -> Option<Player> {
    let target = *format.tie_break_points();
    let cap = *format.tie_break_cap();
    let (one, two) = points;

    let decides = |mine: u8, theirs: u8| {
        mine >= cap || (mine >= target && mine >= theirs.saturating_add(2))
    };

    if decides(one, two) {
        Some(Player::One)
    } else if decides(two, one) {
        Some(Player::Two)
    } else {
        None
    }
}
