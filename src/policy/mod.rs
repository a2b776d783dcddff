//! Difficulty policy: named levels mapped to search depth and randomness.
//!
//! | Level  | Tic-Tac-Toe depth | random | Connect-4 depth | random |
//! |--------|-------------------|--------|-----------------|--------|
//! | Easy   | 1                 | 0.30   | 2               | 0.30   |
//! | Medium | 4                 | 0.10   | 4               | 0.00   |
//! | Hard   | 9                 | 0.00   | 6               | 0.00   |
//!
//! Each game supplies its row of the table through
//! `Game::difficulty_settings`.

pub mod chooser;
pub mod difficulty;

pub use chooser::{choose_move, choose_move_with};
pub use difficulty::{Difficulty, DifficultySettings};
