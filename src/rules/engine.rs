//! Board and game traits for game implementations.
//!
//! Games implement `Board` to define their rules:
//! - What moves are legal
//! - How a move produces the next board
//! - Win and full-board conditions
//!
//! and `Game` to bind a board to its evaluator and difficulty table.
//! The search and policy layers call into these traits but never interpret
//! game-specific concepts directly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MoveError, Player};
use crate::policy::{Difficulty, DifficultySettings};
use crate::search::Evaluator;

/// Legal moves of a position.
///
/// SmallVec covers the largest branching factor (9) without heap allocation.
pub type MoveList<M> = SmallVec<[M; 9]>;

/// Move type of a game's board.
pub type GameMove<G> = <<G as Game>::Board as Board>::Move;

/// Outcome of a board, derived from its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Game continues.
    InProgress,
    /// A player owns a complete line.
    Win(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameResult {
    /// Check if the game has concluded.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Get the winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(p) => Some(p),
            _ => None,
        }
    }
}

/// Board trait.
///
/// Boards are value objects: `apply_move` returns a new board and never
/// touches `self`, so search branches cannot alias the caller's board.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty when the board is full
/// - `apply_move`: Must be deterministic and leave `self` unchanged on error
/// - `winner`: Return the first complete line found; must not panic on
///   positions where both players own a line
pub trait Board: Clone + Default + std::fmt::Debug {
    /// Move type accepted by `apply_move`.
    type Move: Copy + Eq + std::fmt::Debug;

    /// Enumerate legal moves in canonical order.
    fn legal_moves(&self) -> MoveList<Self::Move>;

    /// Return the board after `player` makes `mv`.
    fn apply_move(&self, mv: Self::Move, player: Player) -> Result<Self, MoveError>;

    /// Get the player owning a complete line, if any.
    fn winner(&self) -> Option<Player>;

    /// Check if no further piece can be placed.
    fn is_full(&self) -> bool;

    // === Convenience Methods ===

    /// Check if the game has concluded.
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Derive the game result from the board contents.
    fn result(&self) -> GameResult {
        match self.winner() {
            Some(player) => GameResult::Win(player),
            None if self.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }
}

/// A playable game: a board type, its leaf evaluator, and its difficulty
/// table.
pub trait Game {
    /// Board type.
    type Board: Board;

    /// Leaf evaluator used by the search engine.
    type Evaluator: Evaluator<Self::Board> + Default;

    /// Search depth and random-move probability for a difficulty level.
    fn difficulty_settings(difficulty: Difficulty) -> DifficultySettings;
}
