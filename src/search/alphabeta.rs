//! Minimax search with alpha-beta pruning.
//!
//! The AI is the maximizing side at every even ply; its opponent minimizes
//! at odd plies. Each branch works on its own board copy returned by
//! `Board::apply_move`, so backtracking never touches a sibling's board.
//!
//! Moves are explored in `legal_moves` order and the best move only changes
//! on a strict improvement, so ties keep the earliest move.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{MoveError, Player};
use crate::rules::{Board, Game, GameMove};

use super::evaluator::Evaluator;
use super::stats::SearchStats;

/// Move chosen by a search and its score.
///
/// `best_move` is `None` when the root is terminal or the horizon is zero.
/// A `None` does not always mean there are no legal moves: a won board
/// with empty cells left, or a zero horizon on an open board, still has
/// some. `score` is then the evaluator's score of the root itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome<M> {
    pub best_move: Option<M>,
    pub score: i64,
}

/// Alpha-beta search context.
///
/// Generic over the game. Owns the leaf evaluator, the depth limit and
/// the statistics of the last search. Holds no board between calls.
pub struct AlphaBetaSearch<G: Game> {
    /// Leaf evaluator.
    evaluator: G::Evaluator,

    /// Configured depth, mapped to plies by `Evaluator::horizon`.
    max_depth: u32,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl<G: Game> AlphaBetaSearch<G> {
    /// Create a search context with the game's default evaluator.
    pub fn new(max_depth: u32) -> Self {
        Self::with_evaluator(G::Evaluator::default(), max_depth)
    }

    /// Create a search context with a custom evaluator.
    pub fn with_evaluator(evaluator: G::Evaluator, max_depth: u32) -> Self {
        Self {
            evaluator,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    /// Configured depth.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the best move for `ai`.
    ///
    /// Fails only if the board rejects one of its own legal moves.
    pub fn search(
        &mut self,
        board: &G::Board,
        ai: Player,
    ) -> Result<SearchOutcome<GameMove<G>>, MoveError> {
        let start = Instant::now();
        self.stats.reset();

        let horizon = self.evaluator.horizon(self.max_depth);
        let outcome = self.search_root(board, ai, horizon)?;

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            ?ai,
            max_depth = self.max_depth,
            best_move = ?outcome.best_move,
            score = outcome.score,
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            "alpha-beta search finished"
        );

        Ok(outcome)
    }

    fn search_root(
        &mut self,
        board: &G::Board,
        ai: Player,
        horizon: u32,
    ) -> Result<SearchOutcome<GameMove<G>>, MoveError> {
        self.stats.nodes_visited += 1;

        if horizon == 0 || board.is_terminal() {
            self.stats.leaves_evaluated += 1;
            return Ok(SearchOutcome {
                best_move: None,
                score: self.evaluator.evaluate_leaf(board, ai, 0),
            });
        }

        let mut best = SearchOutcome {
            best_move: None,
            score: i64::MIN,
        };
        let mut alpha = i64::MIN;

        for mv in board.legal_moves() {
            let child = board.apply_move(mv, ai)?;
            let score = self.alphabeta(&child, ai, 1, horizon, alpha, i64::MAX, false)?;

            if score > best.score {
                best = SearchOutcome {
                    best_move: Some(mv),
                    score,
                };
            }
            alpha = alpha.max(best.score);
        }

        Ok(best)
    }

    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &mut self,
        board: &G::Board,
        ai: Player,
        ply: u32,
        horizon: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> Result<i64, MoveError> {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if ply >= horizon || board.is_terminal() {
            self.stats.leaves_evaluated += 1;
            return Ok(self.evaluator.evaluate_leaf(board, ai, ply));
        }

        let mover = if maximizing { ai } else { ai.opponent() };
        let mut value = if maximizing { i64::MIN } else { i64::MAX };

        for mv in board.legal_moves() {
            let child = board.apply_move(mv, mover)?;
            let score = self.alphabeta(&child, ai, ply + 1, horizon, alpha, beta, !maximizing)?;

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(value)
    }
}

/// Run a one-off alpha-beta search with the game's default evaluator.
pub fn best_move<G: Game>(
    board: &G::Board,
    ai: Player,
    max_depth: u32,
) -> Result<SearchOutcome<GameMove<G>>, MoveError> {
    AlphaBetaSearch::<G>::new(max_depth).search(board, ai)
}
