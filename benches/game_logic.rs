use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameSession};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, BOARD_COLS};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
            if !session.phase().is_playing() {
                session.new_game();
                session.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(1);
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..BOARD_COLS as i32 {
                    board.set(row, col, true);
                }
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            board.spawn_piece();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            board.apply_action(black_box(GameAction::MoveRight));
            board.apply_action(black_box(GameAction::MoveLeft));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::new(12345);

    c.bench_function("apply_rotate", |b| {
        b.iter(|| {
            board.apply_action(black_box(GameAction::RotateRight));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let snap = session.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
