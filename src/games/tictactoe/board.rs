//! 3×3 Tic-Tac-Toe board.

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Cell, MoveError, Player};
use crate::games::grid;
use crate::rules::{Board, MoveList};

/// Board side length.
pub const SIZE: usize = 3;

/// A (row, col) coordinate. Row 0 is the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Every complete line: rows, columns, then both diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Tic-Tac-Toe board.
///
/// Serializes as three rows of three cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct TicTacToeBoard {
    cells: [[Cell; SIZE]; SIZE],
}

impl TicTacToeBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Get the cell at a position, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Raw cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Count pieces owned by a player.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Occupied(player))
            .count()
    }
}

impl Board for TicTacToeBoard {
    type Move = Position;

    /// Empty cells in row-major order.
    fn legal_moves(&self) -> MoveList<Position> {
        let mut moves = MoveList::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].is_empty() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    fn apply_move(&self, mv: Position, player: Player) -> Result<Self, MoveError> {
        let Position { row, col } = mv;
        match self.get(row, col) {
            None => Err(MoveError::OutOfRange { row, col }),
            Some(Cell::Occupied(_)) => Err(MoveError::Occupied { row, col }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[row][col] = Cell::Occupied(player);
                Ok(next)
            }
        }
    }

    fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let owner = self.cells[a.0][a.1].owner()?;
            let line = Cell::Occupied(owner);
            (self.cells[b.0][b.1] == line && self.cells[c.0][c.1] == line).then_some(owner)
        })
    }

    fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }
}

impl TryFrom<Vec<Vec<Cell>>> for TicTacToeBoard {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        grid::grid_from_rows(rows).map(Self::from_cells)
    }
}

impl From<TicTacToeBoard> for Vec<Vec<Cell>> {
    fn from(board: TicTacToeBoard) -> Self {
        grid::grid_to_rows(&board.cells)
    }
}

impl std::str::FromStr for TicTacToeBoard {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        grid::parse_grid(s).map(Self::from_cells)
    }
}

impl std::fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        grid::fmt_grid(&self.cells, f)
    }
}
