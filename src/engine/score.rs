//! Running score across rounds

use super::round::Round;
use serde::{Deserialize, Serialize};

/// Total points earned across rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub total: u32,
}

impl ScoreState {
    #[must_use]
    pub const fn new(total: u32) -> Self {
        Self { total }
    }

    /// Add a finished round's points and return the points added
    ///
    /// Call once per round, when it reaches a terminal state.
    pub fn record(&mut self, round: &Round) -> u32 {
        let delta = round.score_delta();
        self.total = self.total.saturating_add(delta);
        delta
    }
}
