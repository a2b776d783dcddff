//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root children included.
    pub nodes_visited: u64,

    /// Nodes scored by the evaluator (terminal or at the horizon).
    pub leaves_evaluated: u64,

    /// Sibling loops cut short by alpha-beta.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter before a new search.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visited nodes that were leaves.
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.leaves_evaluated as f64 / self.nodes_visited as f64
        }
    }
}
