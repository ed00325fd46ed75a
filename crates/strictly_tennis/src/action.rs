//! First-class point events.
//!
//! Points are domain events, not side effects. The match state is
//! always the replay of the recorded points, so undo is a pop.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A rally won by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// The player who won the point.
    pub winner: Player,
}

impl Point {
    /// Creates a new point event.
    #[instrument]
    pub fn new(winner: Player) -> Self {
        Self { winner }
    }

    /// Returns the player who won this point.
    pub fn winner(&self) -> Player {
        self.winner
    }
}

impl From<Player> for Point {
    fn from(winner: Player) -> Self {
        Self { winner }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "point {}", self.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_from_player() {
        let point = Point::from(Player::Two);
        assert_eq!(point, Point::new(Player::Two));
        assert_eq!(point.winner(), Player::Two);
        assert_eq!(point.to_string(), "point Player Two");
    }
}
