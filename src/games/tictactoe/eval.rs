//! Tic-Tac-Toe scoring.
//!
//! The 3×3 tree is small enough to search to the end, so there is no
//! positional heuristic: a board scores ±10 if decided and 0 otherwise.
//! At the leaves the search prefers faster wins and slower losses by
//! shifting the score toward zero by the depth at which it was found.

use crate::core::Player;
use crate::rules::Board;
use crate::search::Evaluator;

use super::board::TicTacToeBoard;

/// Score for a won board.
pub const WIN_SCORE: i64 = 10;

/// Score a board for `player`: +10 won, -10 lost, 0 otherwise.
#[must_use]
pub fn evaluate(board: &TicTacToeBoard, player: Player) -> i64 {
    match board.winner() {
        Some(p) if p == player => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

/// Depth-adjusted leaf evaluator.
///
/// `max_depth` counts plies below the AI's candidate move, so the search
/// horizon is one ply deeper than the configured depth.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToeEvaluator;

impl Evaluator<TicTacToeBoard> for TicTacToeEvaluator {
    fn horizon(&self, max_depth: u32) -> u32 {
        max_depth.saturating_add(1)
    }

    fn evaluate_leaf(&self, board: &TicTacToeBoard, ai: Player, ply: u32) -> i64 {
        let depth = i64::from(ply.saturating_sub(1));
        let score = evaluate(board, ai);
        if score > 0 {
            score - depth
        } else if score < 0 {
            score + depth
        } else {
            score
        }
    }
}
