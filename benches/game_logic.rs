use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_merge::core::{process_row, Game, Grid, SimpleRng};
use tile_merge::types::{Direction, GameAction};

fn bench_process_row(c: &mut Criterion) {
    c.bench_function("process_row_4", |b| {
        b.iter(|| process_row(black_box(&[2, 2, 4, 4])))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = Game::new(4, SimpleRng::new(12345));
    game.start(None);

    c.bench_function("apply_move_cycle", |b| {
        let mut turn = 0usize;
        b.iter(|| {
            if game.game_over() {
                game.start(None);
            }
            let direction = Direction::ALL[turn % 4];
            turn += 1;
            game.apply_action(black_box(&GameAction::Move { direction }))
        })
    });
}

fn bench_has_moves(c: &mut Criterion) {
    let grid = Grid::from_rows(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);

    c.bench_function("has_moves_locked_4x4", |b| {
        b.iter(|| black_box(&grid).has_moves())
    });
}

fn bench_codec(c: &mut Criterion) {
    let grid = Grid::from_rows(&[[2, 4, 8, 16], [32, 64, 128, 256], [0, 0, 2, 0], [4, 0, 0, 2048]]);
    let encoded = grid.serialize();

    c.bench_function("grid_serialize", |b| b.iter(|| black_box(&grid).serialize()));
    c.bench_function("grid_deserialize", |b| {
        b.iter(|| Grid::deserialize(black_box(&encoded)))
    });
}

criterion_group!(
    benches,
    bench_process_row,
    bench_move,
    bench_has_moves,
    bench_codec
);
criterion_main!(benches);
