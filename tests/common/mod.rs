//! Shared helpers for integration tests.

use rust_duel::{Board, Player};

/// Route engine logs to the test harness. Set `RUST_LOG=debug` to see them.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Replay moves alternately from X, picking each by index into the legal
/// moves, until the game ends or the script runs out. Returns the board and
/// the player to move.
#[allow(dead_code)]
pub fn replay<B: Board>(script: &[usize]) -> (B, Player) {
    let mut board = B::default();
    let mut to_move = Player::X;

    for &pick in script {
        if board.is_terminal() {
            break;
        }
        let moves = board.legal_moves();
        let mv = moves[pick % moves.len()];
        board = board.apply_move(mv, to_move).unwrap();
        to_move = to_move.opponent();
    }

    (board, to_move)
}
