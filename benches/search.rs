//! Search benchmarks.
//!
//! Measures alpha-beta against the unpruned reference and the cost of a
//! full policy decision at each difficulty.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_duel::games::connect4::{self, ConnectFour, ConnectFourBoard};
use rust_duel::games::tictactoe::{TicTacToe, TicTacToeBoard};
use rust_duel::{choose_move, AlphaBetaSearch, Difficulty, GameRng, Minimax, Player};
use strum::IntoEnumIterator;

fn bench_tictactoe_empty(c: &mut Criterion) {
    let board = TicTacToeBoard::new();

    c.bench_function("tictactoe_alphabeta_empty", |b| {
        b.iter(|| {
            let mut search = AlphaBetaSearch::<TicTacToe>::new(9);
            black_box(search.search(&board, Player::X).unwrap())
        })
    });

    c.bench_function("tictactoe_minimax_empty", |b| {
        b.iter(|| black_box(Minimax::<TicTacToe>::new(9).value(&board, Player::X).unwrap()))
    });
}

fn bench_connect4_depths(c: &mut Criterion) {
    let board: ConnectFourBoard = "......./......./......./......./...O.../..XX..."
        .parse()
        .unwrap();

    let mut group = c.benchmark_group("connect4_alphabeta");
    for depth in [2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut search = AlphaBetaSearch::<ConnectFour>::new(depth);
                black_box(search.search(&board, connect4::AI).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_policy(c: &mut Criterion) {
    let board = ConnectFourBoard::new();

    let mut group = c.benchmark_group("connect4_choose_move");
    for difficulty in Difficulty::iter() {
        group.bench_function(difficulty.to_string(), |b| {
            let mut rng = GameRng::new(42);
            b.iter(|| black_box(choose_move::<ConnectFour>(&board, connect4::AI, difficulty, &mut rng).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tictactoe_empty, bench_connect4_depths, bench_policy);
criterion_main!(benches);
