//! Best score across runs
//!
//! Lives only as long as the process; owned by the `App` supervisor and never
//! written anywhere.

use serde::{Deserialize, Serialize};

use crate::sim::Score;

/// Best whole-point score seen since startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    best: u32,
    /// Number of completed runs
    runs: u32,
    /// Final score of the most recent completed run
    last: Option<Score>,
}

impl BestScore {
    /// Start at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current best (whole points)
    pub fn get(&self) -> u32 {
        self.best
    }

    /// Check if a final score would beat the current best
    pub fn qualifies(&self, score: Score) -> bool {
        score.whole() > self.best
    }

    /// Record a completed run. Returns true if it set a new best.
    pub fn record(&mut self, score: Score) -> bool {
        self.runs += 1;
        self.last = Some(score);

        if !self.qualifies(score) {
            return false;
        }
        log::info!("New best score: {} (was {})", score.whole(), self.best);
        self.best = score.whole();
        true
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn last(&self) -> Option<Score> {
        self.last
    }
}
