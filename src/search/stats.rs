//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one top-level search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions entered, root included.
    pub nodes: u64,

    /// Positions where the mover had no branch.
    pub terminals: u64,

    /// Times the window closed and remaining moves were skipped.
    pub cutoffs: u64,

    /// Deepest ply reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold in the counters of an independently searched subtree.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.terminals += other.terminals;
        self.cutoffs += other.cutoffs;
        self.max_depth = self.max_depth.max(other.max_depth);
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
