//! Tic-Tac-Toe on a 3×3 grid.
//!
//! - `X` moves first; three in a row wins
//! - Moves are `(row, col)` positions of empty cells
//! - Search runs to full depth on Hard, so the AI never loses there

mod board;
mod eval;

pub use board::{Position, TicTacToeBoard, SIZE};
pub use eval::{evaluate, TicTacToeEvaluator, WIN_SCORE};

use crate::core::Player;
use crate::policy::{Difficulty, DifficultySettings};
use crate::rules::Game;

/// First player.
pub const X: Player = Player::X;
/// Second player.
pub const O: Player = Player::O;

/// Tic-Tac-Toe game binding.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type Board = TicTacToeBoard;
    type Evaluator = TicTacToeEvaluator;

    fn difficulty_settings(difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => DifficultySettings::new(1, 0.3),
            Difficulty::Medium => DifficultySettings::new(4, 0.1),
            Difficulty::Hard => DifficultySettings::new(9, 0.0),
        }
    }
}
