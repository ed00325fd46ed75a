//! Core domain types for tennis scoring.

use super::MatchFormat;
use serde::{Deserialize, Serialize};

/// Number of set slots tracked for a match.
pub const MAX_SETS: usize = 5;

/// Side of the net that won a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// Player one (the watch wearer).
    One,
    /// Player two (the opponent).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Picks this player's half of a per-player pair.
    pub fn of<T: Copy>(self, pair: (T, T)) -> T {
        match self {
            Player::One => pair.0,
            Player::Two => pair.1,
        }
    }

    /// Mutable access to this player's half of a per-player pair.
    pub fn of_mut<T>(self, pair: &mut (T, T)) -> &mut T {
        match self {
            Player::One => &mut pair.0,
            Player::Two => &mut pair.1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}

/// One player's score within the current game.
///
/// Deuce is both players at `Forty`. `Advantage` is only ever held
/// while the opponent sits at `Forty`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum GameScore {
    /// No points.
    #[default]
    Love,
    /// One point.
    Fifteen,
    /// Two points.
    Thirty,
    /// Three points.
    Forty,
    /// One point clear after deuce.
    Advantage,
}

impl GameScore {
    /// Short display code for this score.
    pub fn label(self) -> &'static str {
        match self {
            GameScore::Love => "LV",
            GameScore::Fifteen => "15",
            GameScore::Thirty => "30",
            GameScore::Forty => "40",
            GameScore::Advantage => "AD",
        }
    }
}

impl std::fmt::Display for GameScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps a game score to its short display code.
pub fn format_game_score(score: GameScore) -> &'static str {
    score.label()
}

/// Score record for one set slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetState {
    /// This set is the one currently being played.
    pub active: bool,
    /// Games won by (player one, player two).
    pub games_won: (u8, u8),
    /// The set is being decided by a tie-break.
    pub tie_break_active: bool,
    /// Tie-break points won by (player one, player two).
    pub tie_break_points: (u8, u8),
    /// Winner of the set, once it is finished.
    pub winner: Option<Player>,
}

impl SetState {
    /// Returns true once the set has a winner.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns true if the set has neither started nor finished.
    pub fn is_pending(&self) -> bool {
        !self.active && self.winner.is_none()
    }

    /// Games won by the given player.
    pub fn games(&self, player: Player) -> u8 {
        player.of(self.games_won)
    }

    /// Tie-break points won by the given player.
    pub fn tie_break(&self, player: Player) -> u8 {
        player.of(self.tie_break_points)
    }
}

/// Read-only snapshot of a match, produced on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Current game score for (player one, player two).
    pub game: (GameScore, GameScore),
    /// Index of the active set, or of the last set played once finished.
    pub current_set: usize,
    /// Every set slot in play order.
    pub sets: [SetState; MAX_SETS],
    /// Sets won by (player one, player two).
    pub sets_won: (u8, u8),
    /// Match winner, once the match is over.
    pub winner: Option<Player>,
    /// Rules the match is scored under.
    pub format: MatchFormat,
}

impl MatchSummary {
    /// Returns true once the match has a winner.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The set currently being played.
    pub fn active_set(&self) -> Option<&SetState> {
        self.sets.iter().find(|set| set.active)
    }

    /// Game score of the given player.
    pub fn game_score(&self, player: Player) -> GameScore {
        player.of(self.game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_state_per_player_counts() {
        let set = SetState {
            active: true,
            games_won: (6, 6),
            tie_break_active: true,
            tie_break_points: (4, 3),
            winner: None,
        };

        assert_eq!(set.games(Player::One), 6);
        assert_eq!(set.tie_break(Player::One), 4);
        assert_eq!(set.tie_break(Player::Two), 3);
        assert!(!set.is_finished());
        assert!(!set.is_pending());
    }

    #[test]
    fn test_blank_set_is_pending() {
        assert!(SetState::default().is_pending());
    }
}
