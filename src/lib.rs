//! # rust-duel
//!
//! Game core for Tic-Tac-Toe and Connect-4 against a minimax opponent.
//!
//! ## Design Principles
//!
//! 1. **Stateless**: Every call receives the board explicitly and returns a
//!    new one. Nothing is cached between calls, so concurrent sessions
//!    cannot see each other.
//!
//! 2. **Boards Are Values**: `apply_move` copies. Search branches never
//!    alias the caller's board or each other.
//!
//! 3. **Injected Randomness**: Difficulty randomness comes from a seedable
//!    `GameRng` passed in by the caller, so play is reproducible in tests.
//!
//! ## Modules
//!
//! - `core`: Players, cells, RNG, errors
//! - `rules`: `Board` and `Game` traits, `GameResult`
//! - `games`: Tic-Tac-Toe and Connect-4 boards and evaluators
//! - `search`: Alpha-beta minimax and an unpruned reference
//! - `policy`: Difficulty levels and move choice
//! - `session`: Adapter-facing turn operations and snapshots

pub mod core;
pub mod games;
pub mod policy;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Cell, ChooseError, ConfigError, GameRng, GameRngState, MoveError, Player,
};

pub use crate::rules::{Board, Game, GameMove, GameResult, MoveList};

pub use crate::games::connect4::{ConnectFour, ConnectFourBoard};
pub use crate::games::tictactoe::{Position, TicTacToe, TicTacToeBoard};

pub use crate::search::{best_move, AlphaBetaSearch, Evaluator, Minimax, SearchOutcome, SearchStats};

pub use crate::policy::{choose_move, choose_move_with, Difficulty, DifficultySettings};

pub use crate::session::{
    apply_human_move, choose_ai_move, open_game, play_round, GameSnapshot, RoundReport,
    SnapshotError, TurnError,
};
