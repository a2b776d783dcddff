//! Core engine types: players, cells, RNG, errors.
//!
//! These are shared by both games and by the search and policy layers.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{BoardError, ChooseError, ConfigError, MoveError};
pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
