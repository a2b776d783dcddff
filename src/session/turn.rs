//! Adapter-facing turn operations.
//!
//! An adapter (web route, CLI, test harness) keeps the board between
//! requests and hands it in on every call; these functions return the
//! updated board and never hold one themselves.

use tracing::{debug, instrument};

use crate::core::{GameRng, MoveError, Player};
use crate::policy::{self, Difficulty};
use crate::rules::{Board, Game, GameMove, GameResult};

/// Failure of a turn.
///
/// A rejected human move leaves the caller's board as it was. An engine
/// fault means the search or the board disagreed with itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("invalid move: {0}")]
    InvalidMove(#[source] MoveError),

    #[error("engine fault: {0}")]
    Engine(#[source] MoveError),
}

/// Board after a round, the AI's reply and the derived result.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport<B: Board> {
    pub board: B,
    pub ai_move: Option<B::Move>,
    pub result: GameResult,
}

impl<B: Board> RoundReport<B> {
    fn new(board: B, ai_move: Option<B::Move>) -> Self {
        let result = board.result();
        Self {
            board,
            ai_move,
            result,
        }
    }
}

/// Apply a human move, rejecting any move once the game is over.
#[instrument(level = "debug", skip(board))]
pub fn apply_human_move<B: Board>(board: &B, mv: B::Move, player: Player) -> Result<B, MoveError> {
    if board.is_terminal() {
        return Err(MoveError::GameOver);
    }
    board.apply_move(mv, player)
}

/// Choose the AI's move. `None` means the game is over.
#[instrument(level = "debug", skip(board, rng))]
pub fn choose_ai_move<G: Game>(
    board: &G::Board,
    ai: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Result<Option<GameMove<G>>, MoveError> {
    policy::choose_move::<G>(board, ai, difficulty, rng)
}

/// Play one request cycle: the human's move, then the AI's reply unless
/// the human's move ended the game.
#[instrument(level = "debug", skip(board, rng))]
pub fn play_round<G: Game>(
    board: &G::Board,
    human_move: GameMove<G>,
    human: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Result<RoundReport<G::Board>, TurnError> {
    let board = apply_human_move(board, human_move, human).map_err(TurnError::InvalidMove)?;
    if board.is_terminal() {
        debug!(result = ?board.result(), "game over after human move");
        return Ok(RoundReport::new(board, None));
    }

    reply::<G>(board, human.opponent(), difficulty, rng)
}

/// Start a game on an empty board. When `ai_first` is set the AI opens.
#[instrument(level = "debug", skip(rng))]
pub fn open_game<G: Game>(
    ai_first: bool,
    human: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Result<RoundReport<G::Board>, TurnError> {
    let board = G::Board::default();
    if !ai_first {
        return Ok(RoundReport::new(board, None));
    }
    reply::<G>(board, human.opponent(), difficulty, rng)
}

fn reply<G: Game>(
    board: G::Board,
    ai: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Result<RoundReport<G::Board>, TurnError> {
    let ai_move = choose_ai_move::<G>(&board, ai, difficulty, rng).map_err(TurnError::Engine)?;
    let board = match ai_move {
        Some(mv) => board.apply_move(mv, ai).map_err(TurnError::Engine)?,
        None => board,
    };

    let report = RoundReport::new(board, ai_move);
    debug!(ai_move = ?report.ai_move, result = ?report.result, "AI replied");
    Ok(report)
}
