//! Line input mapping for the scoreboard.

use anyhow::{Result, bail};
use strictly_tennis::Player;

/// A scoreboard command typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Award a point.
    Point(Player),
    /// Undo the last point.
    Undo,
    /// Leave the scoreboard.
    Quit,
}

/// Parses one line of interactive input.
pub fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "1" => Some(Input::Point(Player::One)),
        "2" => Some(Input::Point(Player::Two)),
        "u" | "undo" => Some(Input::Undo),
        "q" | "quit" | "exit" => Some(Input::Quit),
        _ => None,
    }
}

/// Parses a compact point sequence such as `11212`.
///
/// Whitespace and commas are ignored.
pub fn parse_points(points: &str) -> Result<Vec<Player>> {
    points
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .enumerate()
        .map(|(index, c)| match c {
            '1' => Ok(Player::One),
            '2' => Ok(Player::Two),
            other => bail!("Invalid point {:?} at position {}", other, index + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("1\n"), Some(Input::Point(Player::One)));
        assert_eq!(parse_input(" 2 "), Some(Input::Point(Player::Two)));
        assert_eq!(parse_input("U"), Some(Input::Undo));
        assert_eq!(parse_input("quit"), Some(Input::Quit));
        assert_eq!(parse_input("3"), None);
    }

    #[test]
    fn test_parse_points() {
        let points = parse_points("11 2,1").unwrap();
        assert_eq!(points, vec![Player::One, Player::One, Player::Two, Player::One]);
    }

    #[test]
    fn test_parse_points_rejects_other_characters() {
        let err = parse_points("12x").unwrap_err();
        assert!(err.to_string().contains("position 3"));
    }
}
