//! Connect-4 positional heuristic and leaf scoring.
//!
//! `score_position` rewards central control and near-completions, and
//! weights the opponent's open threes more heavily than our own so the
//! search leans toward blocking.

use crate::core::{Cell, Player};
use crate::rules::Board;
use crate::search::Evaluator;

use super::board::{windows, ConnectFourBoard, COLS, ROWS};

/// Leaf score for an AI win.
pub const WIN_SCORE: i64 = 100_000_000_000_000;

/// Leaf score for an AI loss.
pub const LOSS_SCORE: i64 = -10_000_000_000_000;

/// Bonus per own piece in the center column.
pub const CENTER_BONUS: i64 = 3;

/// Score one 4-cell window for `player`.
#[must_use]
pub fn score_window(window: [Cell; 4], player: Player) -> i64 {
    let own = Cell::Occupied(player);
    let opp = Cell::Occupied(player.opponent());

    let own_count = window.iter().filter(|&&c| c == own).count();
    let opp_count = window.iter().filter(|&&c| c == opp).count();
    let empty_count = window.iter().filter(|c| c.is_empty()).count();

    let mut score = match (own_count, empty_count) {
        (4, _) => 100,
        (3, 1) => 10,
        (2, 2) => 2,
        _ => 0,
    };
    score += match (opp_count, empty_count) {
        (3, 1) => -80,
        (2, 2) => -3,
        _ => 0,
    };
    score
}

/// Heuristic strength of a board for `player`.
#[must_use]
pub fn score_position(board: &ConnectFourBoard, player: Player) -> i64 {
    let cells = board.cells();
    let center = COLS / 2;

    let center_count = (0..ROWS)
        .filter(|&row| cells[row][center] == Cell::Occupied(player))
        .count() as i64;

    let windows_score: i64 = windows()
        .map(|w| score_window(w.map(|(r, c)| cells[r][c]), player))
        .sum();

    center_count * CENTER_BONUS + windows_score
}

/// Sentinel scores for decided boards, heuristic otherwise.
///
/// No depth adjustment: the configured depths rarely reach the end of the
/// game, so the heuristic carries the search.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFourEvaluator;

impl Evaluator<ConnectFourBoard> for ConnectFourEvaluator {
    fn evaluate_leaf(&self, board: &ConnectFourBoard, ai: Player, _ply: u32) -> i64 {
        match board.winner() {
            Some(p) if p == ai => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None if board.is_full() => 0,
            None => score_position(board, ai),
        }
    }
}
