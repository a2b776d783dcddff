//! Unpruned minimax reference.
//!
//! Visits every node to the horizon. Slow, but its values are exact, which
//! makes it the yardstick for `AlphaBetaSearch`: pruning may skip branches,
//! never change the value of the chosen move.

use crate::core::{MoveError, Player};
use crate::rules::{Board, Game, GameMove};

use super::evaluator::Evaluator;

/// Exhaustive minimax over a game's evaluator.
pub struct Minimax<G: Game> {
    evaluator: G::Evaluator,
    max_depth: u32,
}

impl<G: Game> Minimax<G> {
    pub fn new(max_depth: u32) -> Self {
        Self {
            evaluator: G::Evaluator::default(),
            max_depth,
        }
    }

    /// Value of the root for `ai`.
    pub fn value(&self, board: &G::Board, ai: Player) -> Result<i64, MoveError> {
        let horizon = self.evaluator.horizon(self.max_depth);
        self.minimax(board, ai, 0, horizon, true)
    }

    /// Exact value of each root move, in `legal_moves` order.
    ///
    /// Empty when the root is terminal or the horizon is zero.
    pub fn move_values(
        &self,
        board: &G::Board,
        ai: Player,
    ) -> Result<Vec<(GameMove<G>, i64)>, MoveError> {
        let horizon = self.evaluator.horizon(self.max_depth);
        if horizon == 0 || board.is_terminal() {
            return Ok(Vec::new());
        }

        board
            .legal_moves()
            .into_iter()
            .map(|mv| -> Result<_, MoveError> {
                let child = board.apply_move(mv, ai)?;
                Ok((mv, self.minimax(&child, ai, 1, horizon, false)?))
            })
            .collect()
    }

    fn minimax(
        &self,
        board: &G::Board,
        ai: Player,
        ply: u32,
        horizon: u32,
        maximizing: bool,
    ) -> Result<i64, MoveError> {
        if ply >= horizon || board.is_terminal() {
            return Ok(self.evaluator.evaluate_leaf(board, ai, ply));
        }

        let mover = if maximizing { ai } else { ai.opponent() };
        let mut values = Vec::new();
        for mv in board.legal_moves() {
            let child = board.apply_move(mv, mover)?;
            values.push(self.minimax(&child, ai, ply + 1, horizon, !maximizing)?);
        }

        let best = if maximizing {
            values.into_iter().max()
        } else {
            values.into_iter().min()
        };
        Ok(best.unwrap_or_else(|| self.evaluator.evaluate_leaf(board, ai, ply)))
    }
}
