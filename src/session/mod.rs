//! Session boundary: the calls a game adapter makes, and the state it
//! keeps between them.
//!
//! The core is stateless. Every call receives the full board and returns
//! a new one; persistence belongs to the adapter, which may use
//! `GameSnapshot` to store a session compactly.

pub mod snapshot;
pub mod turn;

pub use snapshot::{GameSnapshot, SnapshotError};
pub use turn::{apply_human_move, choose_ai_move, open_game, play_round, RoundReport, TurnError};
