//! Connect-4 on a 6×7 gravity grid.
//!
//! - Moves are column indices; pieces fall to the lowest empty row
//! - Four in a row (any direction) wins
//! - Search is depth-limited with a positional heuristic at the horizon

mod board;
mod eval;

pub use board::{windows, ConnectFourBoard, COLS, ROWS, WINDOW, WINDOW_COUNT};
pub use eval::{
    score_position, score_window, ConnectFourEvaluator, CENTER_BONUS, LOSS_SCORE, WIN_SCORE,
};

use crate::core::Player;
use crate::policy::{Difficulty, DifficultySettings};
use crate::rules::Game;

/// The human's piece.
pub const HUMAN: Player = Player::X;
/// The AI's piece.
pub const AI: Player = Player::O;

/// Connect-4 game binding.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFour;

impl Game for ConnectFour {
    type Board = ConnectFourBoard;
    type Evaluator = ConnectFourEvaluator;

    fn difficulty_settings(difficulty: Difficulty) -> DifficultySettings {
        match difficulty {
            Difficulty::Easy => DifficultySettings::new(2, 0.3),
            Difficulty::Medium => DifficultySettings::new(4, 0.0),
            Difficulty::Hard => DifficultySettings::new(6, 0.0),
        }
    }
}
