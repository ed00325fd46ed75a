//! Phase-specific typestate structs for a tennis match.
//!
//! A match is either in progress or finished, and each phase is its own
//! type. Only `MatchInProgress` can accept points; a `MatchFinished`
//! ALWAYS has an outcome, not `Option<MatchOutcome>`.

use super::action::Point;
use super::phases::MatchOutcome;
use super::rules::{
    GameTransition, SetTransition, evaluate_set, match_winner, score_game_point,
    tie_break_winner,
};
use super::types::MAX_SETS;
use super::{GameScore, MatchFormat, MatchSummary, Player, SetState};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Match in progress - can accept points.
///
/// Invariants enforced by construction:
/// - exactly one set slot is active
/// - sets before the active one are finished and frozen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInProgress {
    pub(super) format: MatchFormat,
    pub(super) sets: [SetState; MAX_SETS],
    pub(super) current_set: usize,
    pub(super) game: (GameScore, GameScore),
    pub(super) sets_won: (u8, u8),
    pub(super) history: Vec<Point>,
}

impl MatchInProgress {
    /// Creates a fresh match with the first set active and all scores at love.
    #[instrument]
    pub fn new(format: MatchFormat) -> Self {
        let mut sets = [SetState::default(); MAX_SETS];
        sets[0].active = true;
        Self {
            format,
            sets,
            current_set: 0,
            game: (GameScore::Love, GameScore::Love),
            sets_won: (0, 0),
            history: Vec::new(),
        }
    }

    /// Scores a point, consuming self and transitioning to the next state.
    ///
    /// Postconditions are checked in debug builds only.
    #[instrument(skip(self), fields(winner = ?point.winner(), set = self.current_set))]
    pub fn score(mut self, point: Point) -> MatchProgress {
        #[cfg(debug_assertions)]
        let before = self.summary();

        self.history.push(point);
        let progress = if self.sets[self.current_set].tie_break_active {
            self.score_tie_break(point.winner())
        } else {
            self.score_game(point.winner())
        };

        #[cfg(debug_assertions)]
        {
            use super::contracts::{Contract, PointContract};

            let post = PointContract::post(&before, &progress.summary());
            if let Err(violation) = &post {
                warn!(%violation, "Point contract violated");
            }
            debug_assert!(post.is_ok(), "Point contract violated");
        }

        progress
    }

    fn score_game(mut self, scorer: Player) -> MatchProgress {
        let opponent = scorer.opponent();
        match score_game_point(scorer.of(self.game), opponent.of(self.game)) {
            GameTransition::Continue(mine, theirs) => {
                *scorer.of_mut(&mut self.game) = mine;
                *opponent.of_mut(&mut self.game) = theirs;
                MatchProgress::InProgress(self)
            }
            GameTransition::Won => {
                self.game = (GameScore::Love, GameScore::Love);
                self.credit_game(scorer)
            }
        }
    }

    fn credit_game(mut self, winner: Player) -> MatchProgress {
        let set = &mut self.sets[self.current_set];
        *winner.of_mut(&mut set.games_won) += 1;
        debug!(?winner, games = ?set.games_won, "Game won");

        match evaluate_set(set.games_won, &self.format) {
            SetTransition::Continue => MatchProgress::InProgress(self),
            SetTransition::TieBreak => {
                set.tie_break_active = true;
                debug!(set = self.current_set, "Tie-break started");
                MatchProgress::InProgress(self)
            }
            SetTransition::Won(set_winner) => self.finish_set(set_winner),
        }
    }

    fn score_tie_break(mut self, scorer: Player) -> MatchProgress {
        let set = &mut self.sets[self.current_set];
        *scorer.of_mut(&mut set.tie_break_points) += 1;

        match tie_break_winner(set.tie_break_points, &self.format) {
            None => MatchProgress::InProgress(self),
            Some(winner) => {
                debug!(?winner, points = ?set.tie_break_points, "Tie-break won");
                *winner.of_mut(&mut set.games_won) += 1;
                set.tie_break_active = false;
                self.finish_set(winner)
            }
        }
    }

    fn finish_set(mut self, winner: Player) -> MatchProgress {
        let set = &mut self.sets[self.current_set];
        set.active = false;
        set.winner = Some(winner);
        *winner.of_mut(&mut self.sets_won) += 1;
        debug!(?winner, set = self.current_set, sets_won = ?self.sets_won, "Set won");

        let next = self.current_set + 1;
        let match_over = match_winner(self.sets_won, &self.format)
            .or_else(|| (next >= MAX_SETS).then_some(winner));

        if let Some(champion) = match_over {
            let outcome = MatchOutcome {
                winner: champion,
                sets_won: self.sets_won,
            };
            info!(%outcome, points = self.history.len(), "Match finished");
            return MatchProgress::Finished(MatchFinished {
                format: self.format,
                sets: self.sets,
                last_set: self.current_set,
                history: self.history,
                outcome,
            });
        }

        self.current_set = next;
        self.sets[next].active = true;
        MatchProgress::InProgress(self)
    }

    /// Returns the active set index.
    pub fn current_set(&self) -> usize {
        self.current_set
    }

    /// Returns the current game score for (player one, player two).
    pub fn game(&self) -> (GameScore, GameScore) {
        self.game
    }

    /// Returns all set slots.
    pub fn sets(&self) -> &[SetState; MAX_SETS] {
        &self.sets
    }

    /// Returns point history.
    pub fn history(&self) -> &[Point] {
        &self.history
    }

    /// Returns the format the match is scored under.
    pub fn format(&self) -> &MatchFormat {
        &self.format
    }

    /// Projects the match into a read-only summary.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            game: self.game,
            current_set: self.current_set,
            sets: self.sets,
            sets_won: self.sets_won,
            winner: None,
            format: self.format,
        }
    }

    /// Replays points from a fresh match.
    ///
    /// Points after the one that finishes the match are ignored.
    #[instrument(skip(points), fields(points = points.len()))]
    pub fn replay(format: MatchFormat, points: &[Point]) -> MatchProgress {
        let mut progress = MatchProgress::InProgress(Self::new(format));

        for point in points {
            match progress {
                MatchProgress::InProgress(game) => progress = game.score(*point),
                MatchProgress::Finished(_) => break,
            }
        }

        progress
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Match finished - outcome determined, every set frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFinished {
    format: MatchFormat,
    sets: [SetState; MAX_SETS],
    last_set: usize,
    history: Vec<Point>,
    outcome: MatchOutcome,
}

impl MatchFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    /// Returns all set slots.
    pub fn sets(&self) -> &[SetState; MAX_SETS] {
        &self.sets
    }

    /// Returns point history.
    pub fn history(&self) -> &[Point] {
        &self.history
    }

    /// Projects the match into a read-only summary.
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            game: (GameScore::Love, GameScore::Love),
            current_set: self.last_set,
            sets: self.sets,
            sets_won: self.outcome.sets_won,
            winner: Some(self.outcome.winner),
            format: self.format,
        }
    }

    /// Starts a new match under the same format (consumes finished).
    #[instrument(skip(self))]
    pub fn rematch(self) -> MatchInProgress {
        MatchInProgress::new(self.format)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Either phase of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchProgress {
    /// Match continues.
    InProgress(MatchInProgress),
    /// Match finished.
    Finished(MatchFinished),
}

impl MatchProgress {
    /// Scores a point; a finished match absorbs it unchanged.
    pub fn score(self, point: Point) -> Self {
        match self {
            MatchProgress::InProgress(game) => game.score(point),
            MatchProgress::Finished(done) => {
                warn!(winner = ?point.winner(), "Ignoring point after match end");
                MatchProgress::Finished(done)
            }
        }
    }

    /// Returns true once the match has an outcome.
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchProgress::Finished(_))
    }

    /// Returns point history for either phase.
    pub fn history(&self) -> &[Point] {
        match self {
            MatchProgress::InProgress(game) => game.history(),
            MatchProgress::Finished(done) => done.history(),
        }
    }

    /// Projects either phase into a summary.
    pub fn summary(&self) -> MatchSummary {
        match self {
            MatchProgress::InProgress(game) => game.summary(),
            MatchProgress::Finished(done) => done.summary(),
        }
    }

    /// Returns the match format.
    pub fn format(&self) -> &MatchFormat {
        match self {
            MatchProgress::InProgress(game) => &game.format,
            MatchProgress::Finished(done) => &done.format,
        }
    }
}
