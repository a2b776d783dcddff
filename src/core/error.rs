//! Error types for board construction and move application.
//!
//! - `MoveError`: a move that cannot be placed. The board is left untouched.
//! - `BoardError`: a board that cannot be built from external input.
//! - `ConfigError`: search or difficulty settings outside their valid range.
//! - `ChooseError`: a move choice that failed on its settings or its board.

/// Rejected move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is out of range")]
    OutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Malformed board input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell character {0:?}")]
    InvalidCell(char),

    #[error("piece at ({row}, {col}) is floating above an empty cell")]
    FloatingPiece { row: usize, col: usize },
}

/// Invalid settings.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("random move probability {0} is outside [0, 1)")]
    Probability(f64),
}

/// Failed move choice with caller-supplied settings.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChooseError {
    #[error(transparent)]
    Settings(#[from] ConfigError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
