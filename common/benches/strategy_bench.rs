use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use gomoku_common::games::SessionRng;
use gomoku_common::games::gomoku::{Board, DecisionStrategy, HeuristicStrategy, Mark, evaluate};

fn mid_game_board() -> Board {
    let mut board = Board::new(15, 15).unwrap();
    let moves = [
        (7, 7, Mark::First), (7, 8, Mark::Second), (8, 7, Mark::First), (8, 8, Mark::Second),
        (6, 6, Mark::First), (9, 9, Mark::Second), (5, 5, Mark::First), (10, 10, Mark::Second),
        (8, 6, Mark::First), (6, 8, Mark::Second), (7, 9, Mark::First), (9, 7, Mark::Second),
        (6, 10, Mark::First), (10, 6, Mark::Second), (7, 5, Mark::First), (5, 7, Mark::Second),
    ];
    for (row, col, mark) in moves {
        board.place(row, col, mark);
    }
    board
}

fn bench_heuristic_empty_board() {
    let board = Board::new(15, 15).unwrap();
    let mut rng = SessionRng::new(1);
    HeuristicStrategy::new(Mark::Second).choose_move(&board, &mut rng);
}

fn bench_heuristic_mid_game(board: &Board) {
    let mut rng = SessionRng::new(1);
    HeuristicStrategy::new(Mark::Second).choose_move(board, &mut rng);
}

fn bench_bot_vs_bot_game() {
    let mut board = Board::new(15, 15).unwrap();
    let first = HeuristicStrategy::new(Mark::First);
    let second = HeuristicStrategy::new(Mark::Second);
    let mut rng = SessionRng::new(42);
    let mut mark = Mark::First;

    while !evaluate(&board).is_terminal() {
        let strategy = if mark == Mark::First { &first } else { &second };
        let Some(mv) = strategy.choose_move(&board, &mut rng) else {
            break;
        };
        board.place(mv.row, mv.col, mark);
        mark = mark.opponent().unwrap();
    }
}

fn strategy_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_heuristic_empty_board)
    });

    let board = mid_game_board();
    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| bench_heuristic_mid_game(&board))
    });

    group.bench_function("bot_vs_bot_game", |b| {
        b.iter(bench_bot_vs_bot_game)
    });

    group.finish();
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
