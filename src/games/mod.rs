//! Game implementations.
//!
//! - `tictactoe`: 3×3, three in a row, full-depth search
//! - `connect4`: 6×7 with gravity, four in a row, heuristic search

pub mod connect4;
mod grid;
pub mod tictactoe;
