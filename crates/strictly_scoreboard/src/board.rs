//! Text rendering of a match summary.

use strictly_tennis::{GameScore, MatchSummary, Player, format_game_score};
use strum::IntoEnumIterator;

/// Display cells for the current game, for (player one, player two).
///
/// The player at Advantage shows "AD" and the opponent shows "-". During
/// a tie-break the cells show tie-break points instead.
pub fn game_cells(summary: &MatchSummary) -> (String, String) {
    if let Some(set) = summary.active_set().filter(|set| set.tie_break_active) {
        return (
            set.tie_break(Player::One).to_string(),
            set.tie_break(Player::Two).to_string(),
        );
    }

    match summary.game {
        (GameScore::Advantage, _) => ("AD".to_string(), "-".to_string()),
        (_, GameScore::Advantage) => ("-".to_string(), "AD".to_string()),
        (one, two) => (
            format_game_score(one).to_string(),
            format_game_score(two).to_string(),
        ),
    }
}

fn row(summary: &MatchSummary, player: Player, game: &str) -> String {
    let sets = usize::from(*summary.format.sets());
    let mut line = format!("{:<11}", player.to_string());

    for set in summary.sets.iter().take(sets) {
        let cell = if set.is_pending() {
            ".".to_string()
        } else {
            set.games(player).to_string()
        };
        line.push_str(&format!("{:>3}", cell));
    }

    let marker = if summary.winner == Some(player) { " *" } else { "" };
    line.push_str(&format!("{:>6}{}", game, marker));
    line
}

/// Renders the scoreboard, optionally followed by elapsed time.
pub fn render_board(summary: &MatchSummary, elapsed: Option<&str>) -> String {
    let sets = usize::from(*summary.format.sets());
    let tie_break = summary.active_set().is_some_and(|set| set.tie_break_active);

    let mut header = format!("{:<11}", "");
    for index in 1..=sets {
        header.push_str(&format!("{:>3}", format!("S{}", index)));
    }
    header.push_str(&format!("{:>6}", if tie_break { "TB" } else { "GAME" }));

    let (one, two) = game_cells(summary);
    let mut lines = vec![header];
    lines.extend(
        Player::iter().map(|player| row(summary, player, player.of((one.as_str(), two.as_str())))),
    );

    if let Some(winner) = summary.winner {
        let (won, lost) = (winner.of(summary.sets_won), winner.opponent().of(summary.sets_won));
        lines.push(format!("Game, set and match: {} {}-{}", winner, won, lost));
    }
    if let Some(elapsed) = elapsed {
        lines.push(format!("Time {}", elapsed));
    }

    lines.join("\n")
}
