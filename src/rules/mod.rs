//! Board and game traits for game implementations.
//!
//! Games implement `Board` to define:
//! - Legal moves for each board
//! - How moves produce new boards
//! - Win and draw conditions
//!
//! The search engine calls into `Board` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Board, Game, GameMove, GameResult, MoveList};
