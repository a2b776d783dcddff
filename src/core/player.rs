//! Players and board cells.
//!
//! ## Player
//!
//! Two-sided player identifier. Tic-Tac-Toe uses the values as `X` and `O`;
//! Connect-4 aliases them as the human and AI pieces.
//!
//! ## Cell
//!
//! A single grid square, either empty or owned by one player. Cells have a
//! canonical character code (`.`, `X`, `O`) used by `Display`, `FromStr` and
//! serde, so a board survives any transport round trip unchanged.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player (Tic-Tac-Toe `X`, Connect-4 human).
    X,
    /// Second player (Tic-Tac-Toe `O`, Connect-4 AI).
    O,
}

impl Player {
    /// Both players, in seat order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Canonical character code.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A grid square.
///
/// Text form is `.` (or `_`), `X`, `O`. Spaces are padding, never cells.
/// Once occupied, a cell never becomes empty again within a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the owner of the cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    /// Canonical character code.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(p) => p.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        cell.symbol()
    }
}

impl TryFrom<char> for Cell {
    type Error = BoardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' | '_' => Ok(Cell::Empty),
            'X' | 'x' => Ok(Cell::Occupied(Player::X)),
            'O' | 'o' => Ok(Cell::Occupied(Player::O)),
            other => Err(BoardError::InvalidCell(other)),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
