use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::{Duration, Instant};
use common::games::SessionRng;
use common::games::tictactoe::{
    calculate_move, evaluate, Board, BotInput, GameMode, Mark, Outcome, Position, SessionSettings,
    TicTacToeSession,
};
use common::SessionId;

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut session_rng = SessionRng::from_random();

    while evaluate(&board).outcome == Outcome::Undecided {
        let input = BotInput::new(board, current_mark);
        let Some(pos) = calculate_move(input, &mut session_rng) else {
            break;
        };
        board.place(pos, current_mark);
        current_mark = current_mark.opponent().unwrap();
    }
}

fn bench_single_move_empty_board() {
    let mut session_rng = SessionRng::from_random();
    calculate_move(BotInput::new(Board::new(), Mark::O), &mut session_rng);
}

fn bench_single_move_fork() {
    let board = Board::from_rows([
        [Mark::X, Mark::Empty, Mark::O],
        [Mark::Empty, Mark::O, Mark::Empty],
        [Mark::X, Mark::Empty, Mark::X],
    ]);
    let mut session_rng = SessionRng::from_random();
    calculate_move(BotInput::new(board, Mark::O), &mut session_rng);
}

fn bench_single_move_mid_game() {
    let mut board = Board::new();
    let moves = [
        (0, 0, Mark::X), (1, 1, Mark::O), (2, 2, Mark::X), (0, 2, Mark::O),
    ];
    for (row, col, mark) in moves {
        board.place(Position::new(row, col), mark);
    }

    let mut session_rng = SessionRng::from_random();
    calculate_move(BotInput::new(board, Mark::X), &mut session_rng);
}

fn bench_session_against_bot() {
    let now = Instant::now();
    let settings = SessionSettings {
        win_highlight_delay: Duration::ZERO,
        ..SessionSettings::default()
    };
    let mut session = TicTacToeSession::new(
        SessionId::from("bench"),
        settings,
        SessionRng::from_random(),
        now,
    );
    session.start(GameMode::HumanVsBot, "Bench", None, now);

    while session.is_active() {
        let Some(&pos) = session.board().available_moves().first() else {
            break;
        };
        let Ok(report) = session.attempt_move(pos.row, pos.col, now) else {
            break;
        };
        if let Some(task) = report.scheduled {
            session.run_task(&task, now);
        }
    }
}

fn bot_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("bot");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("single_move_fork", |b| {
        b.iter(bench_single_move_fork)
    });

    group.bench_function("session_against_bot", |b| {
        b.iter(bench_session_against_bot)
    });

    group.finish();
}

criterion_group!(benches, bot_bench);
criterion_main!(benches);
