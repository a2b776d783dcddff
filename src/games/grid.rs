//! Fixed-size cell grids shared by the board implementations.
//!
//! Boards store a `[[Cell; C]; R]` array and convert to and from
//! `Vec<Vec<Cell>>` (their serde form) and text (their `FromStr`/`Display`
//! form). Text rows are separated by `/` or newlines; whitespace around a
//! row is ignored.

use crate::core::{BoardError, Cell};

/// Convert row vectors into a fixed grid, checking the shape.
pub(crate) fn grid_from_rows<const R: usize, const C: usize>(
    rows: Vec<Vec<Cell>>,
) -> Result<[[Cell; C]; R], BoardError> {
    if rows.len() != R {
        return Err(BoardError::RowCount {
            expected: R,
            found: rows.len(),
        });
    }

    let mut grid = [[Cell::Empty; C]; R];
    for (r, row) in rows.into_iter().enumerate() {
        if row.len() != C {
            return Err(BoardError::RowLength {
                row: r,
                expected: C,
                found: row.len(),
            });
        }
        grid[r].copy_from_slice(&row);
    }
    Ok(grid)
}

/// Convert a fixed grid into row vectors.
pub(crate) fn grid_to_rows<const R: usize, const C: usize>(grid: &[[Cell; C]; R]) -> Vec<Vec<Cell>> {
    grid.iter().map(|row| row.to_vec()).collect()
}

/// Parse text rows into a fixed grid.
pub(crate) fn parse_grid<const R: usize, const C: usize>(
    s: &str,
) -> Result<[[Cell; C]; R], BoardError> {
    let rows = s
        .split(['/', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(Cell::try_from).collect::<Result<Vec<_>, _>>())
        .collect::<Result<Vec<_>, _>>()?;
    grid_from_rows(rows)
}

/// Write a grid as text, one row per line.
pub(crate) fn fmt_grid<const R: usize, const C: usize>(
    grid: &[[Cell; C]; R],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    for (r, row) in grid.iter().enumerate() {
        if r > 0 {
            writeln!(f)?;
        }
        for cell in row {
            write!(f, "{cell}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_parse_grid_slash_and_newline() {
        let a: [[Cell; 2]; 2] = parse_grid("X./.O").unwrap();
        let b: [[Cell; 2]; 2] = parse_grid("X.\n.O\n").unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0][0], Cell::Occupied(Player::X));
        assert_eq!(a[1][1], Cell::Occupied(Player::O));
    }

    #[test]
    fn test_grid_shape_errors() {
        let rows: Result<[[Cell; 3]; 3], _> = parse_grid(".../...");
        assert_eq!(rows, Err(BoardError::RowCount { expected: 3, found: 2 }));

        let cols: Result<[[Cell; 3]; 3], _> = parse_grid(".../..../...");
        assert_eq!(
            cols,
            Err(BoardError::RowLength {
                row: 1,
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_invalid_character() {
        let grid: Result<[[Cell; 1]; 1], _> = parse_grid("Q");
        assert_eq!(grid, Err(BoardError::InvalidCell('Q')));
    }

    #[test]
    fn test_spaces_are_padding_not_cells() {
        let padded: [[Cell; 3]; 3] = parse_grid("  X.. / ... /...  ").unwrap();
        assert_eq!(padded[0][0], Cell::Occupied(Player::X));

        let inner: Result<[[Cell; 3]; 3], _> = parse_grid("X ./.../...");
        assert_eq!(inner, Err(BoardError::InvalidCell(' ')));

        let blank_row: Result<[[Cell; 3]; 3], _> = parse_grid("X../   /...");
        assert_eq!(blank_row, Err(BoardError::RowCount { expected: 3, found: 2 }));
    }
}
