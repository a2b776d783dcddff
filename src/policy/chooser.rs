//! Move choice for an AI turn.
//!
//! One uniform sample is drawn per call. Below the level's random-move
//! probability the AI plays a uniform legal move; otherwise it searches to
//! the level's depth.

use tracing::{debug, instrument, warn};

use crate::core::{ChooseError, GameRng, MoveError, Player};
use crate::rules::{Board, Game, GameMove};
use crate::search::AlphaBetaSearch;

use super::difficulty::{Difficulty, DifficultySettings};

/// Choose a move for `ai` at a difficulty level.
///
/// Returns `Ok(None)` only when the board is terminal. The game's
/// difficulty table is trusted; each game's tests validate it.
#[instrument(level = "debug", skip(board, rng))]
pub fn choose_move<G: Game>(
    board: &G::Board,
    ai: Player,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Result<Option<GameMove<G>>, MoveError> {
    choose::<G>(board, ai, G::difficulty_settings(difficulty), rng)
}

/// Choose a move for `ai` with explicit settings.
///
/// Settings are validated before any random sample is drawn, so a
/// probability outside `[0, 1)` or NaN is rejected rather than played.
pub fn choose_move_with<G: Game>(
    board: &G::Board,
    ai: Player,
    settings: DifficultySettings,
    rng: &mut GameRng,
) -> Result<Option<GameMove<G>>, ChooseError> {
    settings.validate()?;
    Ok(choose::<G>(board, ai, settings, rng)?)
}

fn choose<G: Game>(
    board: &G::Board,
    ai: Player,
    settings: DifficultySettings,
    rng: &mut GameRng,
) -> Result<Option<GameMove<G>>, MoveError> {
    if board.is_terminal() {
        return Ok(None);
    }

    let moves = board.legal_moves();
    if let [only] = moves.as_slice() {
        return Ok(Some(*only));
    }

    let roll = rng.gen_f64();
    if roll < settings.random_move_probability {
        let mv = rng.pick(&moves);
        debug!(roll, threshold = settings.random_move_probability, ?mv, "playing random move");
        return Ok(mv);
    }

    let mut search = AlphaBetaSearch::<G>::new(settings.max_depth);
    let outcome = search.search(board, ai)?;

    match outcome.best_move {
        Some(mv) => {
            debug!(?mv, score = outcome.score, nodes = search.stats().nodes_visited, "playing searched move");
            Ok(Some(mv))
        }
        None => {
            let mv = rng.pick(&moves);
            warn!(max_depth = settings.max_depth, ?mv, "search produced no move, falling back to random");
            Ok(mv)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;
    use crate::games::connect4::{self, ConnectFour, ConnectFourBoard};
    use crate::games::tictactoe::{Position, TicTacToe, TicTacToeBoard};

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: TicTacToeBoard = "XXX/OO./...".parse().unwrap();
        let mut rng = GameRng::new(1);
        let mv = choose_move::<TicTacToe>(&board, Player::O, Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(mv, None);
    }

    #[test]
    fn test_single_move_skips_randomness() {
        let board: TicTacToeBoard = "XOX/XOO/OX.".parse().unwrap();
        let settings = DifficultySettings::new(0, 0.99);

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let mv = choose_move_with::<TicTacToe>(&board, Player::X, settings, &mut rng).unwrap();
            assert_eq!(mv, Some(Position::new(2, 2)));
        }
    }

    #[test]
    fn test_always_random_returns_legal_move() {
        let board: ConnectFourBoard = "X....../X....../X....../O....../O....../O......"
            .parse()
            .unwrap();
        let settings = DifficultySettings::new(4, 0.999_999);
        let mut rng = GameRng::new(3);

        for _ in 0..50 {
            let mv = choose_move_with::<ConnectFour>(&board, connect4::AI, settings, &mut rng)
                .unwrap()
                .unwrap();
            assert!((1..7).contains(&mv));
        }
    }

    #[test]
    fn test_zero_depth_falls_back_to_legal_move() {
        let board = ConnectFourBoard::new();
        let settings = DifficultySettings::new(0, 0.0);
        let mut rng = GameRng::new(9);

        let mv = choose_move_with::<ConnectFour>(&board, connect4::AI, settings, &mut rng).unwrap();
        assert!(matches!(mv, Some(col) if col < 7));
    }

    #[test]
    fn test_invalid_settings_rejected_before_drawing() {
        let board = ConnectFourBoard::new();
        let mut rng = GameRng::new(5);
        let before = rng.state();

        let err = choose_move_with::<ConnectFour>(
            &board,
            connect4::AI,
            DifficultySettings::new(4, 1.5),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(err, ChooseError::Settings(ConfigError::Probability(1.5)));

        let nan = DifficultySettings::new(4, f64::NAN);
        let err = choose_move_with::<ConnectFour>(&board, connect4::AI, nan, &mut rng).unwrap_err();
        assert!(matches!(err, ChooseError::Settings(ConfigError::Probability(p)) if p.is_nan()));

        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = TicTacToeBoard::new().apply_move(Position::new(1, 1), Player::X).unwrap();

        let pick = |seed| {
            let mut rng = GameRng::new(seed);
            choose_move::<TicTacToe>(&board, Player::O, Difficulty::Easy, &mut rng).unwrap()
        };
        assert_eq!(pick(77), pick(77));
    }
}
