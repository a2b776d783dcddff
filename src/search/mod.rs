//! Adversarial search for rust-duel.
//!
//! ## Overview
//!
//! Two-player zero-sum minimax with alpha-beta pruning:
//!
//! - **Depth-limited**: Leaves are terminal boards or boards at the horizon
//! - **Game-agnostic**: Works over any `Board`; leaf scoring comes from the
//!   game's `Evaluator`
//! - **Copy per branch**: Each explored move produces a fresh board value
//! - **Reference**: `Minimax` runs the same tree unpruned for verification
//!
//! ## Usage
//!
//! ```rust
//! use rust_duel::games::connect4::{self, ConnectFour, ConnectFourBoard};
//! use rust_duel::search::AlphaBetaSearch;
//!
//! let mut search = AlphaBetaSearch::<ConnectFour>::new(4);
//! let outcome = search.search(&ConnectFourBoard::new(), connect4::AI).unwrap();
//!
//! assert!(outcome.best_move.is_some());
//! println!("nodes: {}", search.stats().nodes_visited);
//! ```

pub mod alphabeta;
pub mod evaluator;
pub mod minimax;
pub mod stats;

pub use alphabeta::{best_move, AlphaBetaSearch, SearchOutcome};
pub use evaluator::Evaluator;
pub use minimax::Minimax;
pub use stats::SearchStats;
