//! 6×7 Connect-4 board with gravity.
//!
//! Row 0 is the top, row 5 is the bottom. A move names a column; the piece
//! lands in the lowest empty row of that column.

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, Cell, MoveError, Player};
use crate::games::grid;
use crate::rules::{Board, MoveList};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Cells in a line.
pub const WINDOW: usize = 4;

/// Number of horizontal, vertical and diagonal 4-cell windows.
pub const WINDOW_COUNT: usize = 69;

/// All 4-cell windows: horizontal, vertical, rising diagonal (`/`),
/// falling diagonal (`\`).
pub fn windows() -> impl Iterator<Item = [(usize, usize); WINDOW]> {
    let horizontal = (0..ROWS).flat_map(|r| {
        (0..=COLS - WINDOW).map(move |c| [(r, c), (r, c + 1), (r, c + 2), (r, c + 3)])
    });
    let vertical = (0..COLS).flat_map(|c| {
        (0..=ROWS - WINDOW).map(move |r| [(r, c), (r + 1, c), (r + 2, c), (r + 3, c)])
    });
    let rising = (0..=ROWS - WINDOW).flat_map(|r| {
        (0..=COLS - WINDOW)
            .map(move |c| [(r + 3, c), (r + 2, c + 1), (r + 1, c + 2), (r, c + 3)])
    });
    let falling = (0..=ROWS - WINDOW).flat_map(|r| {
        (0..=COLS - WINDOW)
            .map(move |c| [(r, c), (r + 1, c + 1), (r + 2, c + 2), (r + 3, c + 3)])
    });
    horizontal.chain(vertical).chain(rising).chain(falling)
}

/// Connect-4 board.
///
/// Serializes as six rows of seven cells, top row first. Deserialization
/// rejects pieces floating above empty cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct ConnectFourBoard {
    cells: [[Cell; COLS]; ROWS],
}

impl ConnectFourBoard {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from raw cells, checking gravity.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Result<Self, BoardError> {
        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if !cells[row][col].is_empty() && cells[row + 1][col].is_empty() {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Get the cell at a position, or `None` if out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Raw cells, top row first.
    #[must_use]
    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Check if a column can take another piece.
    #[must_use]
    pub fn is_open(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_empty()
    }

    /// Row a piece dropped into `col` would land in.
    #[must_use]
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Drop a piece, returning the new board and the landing row.
    pub fn drop_piece(&self, col: usize, player: Player) -> Result<(Self, usize), MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange(col));
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;

        let mut next = *self;
        next.cells[row][col] = Cell::Occupied(player);
        Ok((next, row))
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

impl Board for ConnectFourBoard {
    type Move = usize;

    /// Open columns, left to right.
    fn legal_moves(&self) -> MoveList<usize> {
        (0..COLS).filter(|&col| self.is_open(col)).collect()
    }

    fn apply_move(&self, col: usize, player: Player) -> Result<Self, MoveError> {
        self.drop_piece(col, player).map(|(board, _)| board)
    }

    fn winner(&self) -> Option<Player> {
        windows().find_map(|window| {
            let [first, rest @ ..] = window;
            let owner = self.cells[first.0][first.1].owner()?;
            rest.iter()
                .all(|&(r, c)| self.cells[r][c] == Cell::Occupied(owner))
                .then_some(owner)
        })
    }

    fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_open(col))
    }
}

impl TryFrom<Vec<Vec<Cell>>> for ConnectFourBoard {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_cells(grid::grid_from_rows(rows)?)
    }
}

impl From<ConnectFourBoard> for Vec<Vec<Cell>> {
    fn from(board: ConnectFourBoard) -> Self {
        grid::grid_to_rows(&board.cells)
    }
}

impl std::str::FromStr for ConnectFourBoard {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_cells(grid::parse_grid(s)?)
    }
}

impl std::fmt::Display for ConnectFourBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        grid::fmt_grid(&self.cells, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameResult;

    fn drop_all(moves: &[(usize, Player)]) -> ConnectFourBoard {
        moves
            .iter()
            .fold(ConnectFourBoard::new(), |b, &(col, p)| b.apply_move(col, p).unwrap())
    }

    #[test]
    fn test_window_count() {
        assert_eq!(windows().count(), WINDOW_COUNT);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = ConnectFourBoard::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.legal_moves().as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece() {
        let board = ConnectFourBoard::new();

        let (board, row) = board.drop_piece(3, Player::X).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Some(Cell::Occupied(Player::X)));

        let (board, row) = board.drop_piece(3, Player::O).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Some(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_apply_move_leaves_original() {
        let board = ConnectFourBoard::new();
        let next = board.apply_move(0, Player::X).unwrap();
        assert_eq!(board, ConnectFourBoard::new());
        assert_ne!(next, board);
    }

    #[test]
    fn test_column_full() {
        let mut board = ConnectFourBoard::new();
        for _ in 0..ROWS {
            board = board.apply_move(0, Player::X).unwrap();
        }

        assert!(!board.is_open(0));
        assert!(!board.legal_moves().contains(&0));
        assert_eq!(board.apply_move(0, Player::O), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let board = ConnectFourBoard::new();
        assert_eq!(board.apply_move(7, Player::X), Err(MoveError::ColumnOutOfRange(7)));
        assert_eq!(board.next_open_row(7), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = ConnectFourBoard::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board = board.apply_move(col, Player::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let board = drop_all(&[(0, Player::X), (1, Player::X), (2, Player::X), (3, Player::X)]);
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.result(), GameResult::Win(Player::X));
    }

    #[test]
    fn test_vertical_win() {
        let board = drop_all(&[(3, Player::O), (3, Player::O), (3, Player::O), (3, Player::O)]);
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_rising_diagonal_win() {
        let board = drop_all(&[
            (0, Player::X),
            (1, Player::O),
            (1, Player::X),
            (2, Player::O),
            (2, Player::O),
            (2, Player::X),
            (3, Player::O),
            (3, Player::O),
            (3, Player::O),
            (3, Player::X),
        ]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_falling_diagonal_win() {
        let board = drop_all(&[
            (6, Player::X),
            (5, Player::O),
            (5, Player::X),
            (4, Player::O),
            (4, Player::O),
            (4, Player::X),
            (3, Player::O),
            (3, Player::O),
            (3, Player::O),
            (3, Player::X),
        ]);
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = drop_all(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_parse_and_display() {
        let text = ".......\n.......\n.......\n.......\n....O..\nXXX.O..";
        let board: ConnectFourBoard = text.parse().unwrap();
        assert_eq!(board.get(5, 0), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(4, 3), Some(Cell::Empty));
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_parse_rejects_floating_piece() {
        let text = "......./......./......./......./...O.../.......";
        let result: Result<ConnectFourBoard, _> = text.parse();
        assert_eq!(result, Err(BoardError::FloatingPiece { row: 4, col: 3 }));
    }

    #[test]
    fn test_serde_round_trip() {
        let board = drop_all(&[(3, Player::X), (3, Player::O), (0, Player::X)]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: ConnectFourBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_serde_rejects_bad_shape() {
        let json = r#"[[".",".",".",".",".",".","."]]"#;
        let result: Result<ConnectFourBoard, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
