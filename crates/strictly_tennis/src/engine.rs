//! Match engine owned by the display layer.

use super::action::Point;
use super::contracts::{Contract, PointContract};
use super::typestate::{MatchInProgress, MatchProgress};
use super::{MatchFormat, MatchSummary, Player};
use tracing::{debug, instrument, warn};

/// Tennis match engine.
///
/// The point history is the source of truth. Scoring applies the new
/// point to the current state; undo replays the history minus its last
/// point from a fresh match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEngine {
    progress: MatchProgress,
}

impl MatchEngine {
    /// Creates an engine for a best-of-five match.
    #[instrument]
    pub fn new() -> Self {
        Self::with_format(MatchFormat::default())
    }

    /// Creates an engine for the given format.
    #[instrument]
    pub fn with_format(format: MatchFormat) -> Self {
        Self {
            progress: MatchProgress::InProgress(MatchInProgress::new(format)),
        }
    }

    /// Records a point won by `player`.
    ///
    /// Once the match is over the point is ignored and not recorded, so
    /// finished sets never change.
    #[instrument(skip(self), fields(points = self.point_count()))]
    pub fn register_point(&mut self, player: Player) {
        let point = Point::new(player);
        if let Err(reason) = PointContract::pre(&self.summary(), &point) {
            warn!(%reason, ?player, "Point ignored");
            return;
        }

        let fresh = MatchProgress::InProgress(MatchInProgress::new(*self.format()));
        let current = std::mem::replace(&mut self.progress, fresh);
        self.progress = current.score(point);
    }

    /// Removes the most recent point. Does nothing on an empty history.
    #[instrument(skip(self), fields(points = self.point_count()))]
    pub fn undo(&mut self) {
        let Some((undone, kept)) = self.progress.history().split_last() else {
            debug!("Nothing to undo");
            return;
        };
        debug!(%undone, "Undoing point");

        self.progress = MatchInProgress::replay(*self.format(), kept);
    }

    /// Returns a read-only snapshot of the match.
    pub fn summary(&self) -> MatchSummary {
        self.progress.summary()
    }

    /// Returns the recorded points, oldest first.
    pub fn history(&self) -> &[Point] {
        self.progress.history()
    }

    /// Returns the number of recorded points.
    pub fn point_count(&self) -> usize {
        self.progress.history().len()
    }

    /// Returns true once the match has a winner.
    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
    }

    /// Returns the match winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match &self.progress {
            MatchProgress::Finished(done) => Some(done.outcome().winner()),
            MatchProgress::InProgress(_) => None,
        }
    }

    /// Returns the format the match is scored under.
    pub fn format(&self) -> &MatchFormat {
        self.progress.format()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
