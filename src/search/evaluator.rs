//! Leaf evaluation seam between the search engine and a game.

use crate::core::Player;
use crate::rules::Board;

/// Scores search leaves for one game.
///
/// A leaf is either a terminal board or a board at the search horizon.
/// Scores are always from the AI's point of view: higher is better for `ai`.
pub trait Evaluator<B: Board> {
    /// Number of plies below the root to explore for a configured depth.
    ///
    /// Defaults to `max_depth`, with the AI's own move counted as ply 1.
    fn horizon(&self, max_depth: u32) -> u32 {
        max_depth
    }

    /// Score a leaf `ply` moves below the root.
    fn evaluate_leaf(&self, board: &B, ai: Player, ply: u32) -> i64;
}
