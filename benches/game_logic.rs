use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_bowling::core::{resolve_frames, score_rolls, Game, GameSnapshot};

const MIXED_GAME: [u8; 17] = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

fn bench_record_roll(c: &mut Criterion) {
    c.bench_function("record_roll", |b| {
        b.iter(|| {
            let mut game = Game::new();
            game.roll(black_box(7));
            game.score()
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("score_mixed_game", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for &pins in MIXED_GAME.iter() {
                game.roll(black_box(i32::from(pins)));
            }
            game.score()
        })
    });
}

fn bench_resolve_frames(c: &mut Criterion) {
    c.bench_function("resolve_frames", |b| {
        b.iter(|| resolve_frames(black_box(&MIXED_GAME)))
    });
}

fn bench_score_rolls(c: &mut Criterion) {
    let perfect = [10u8; 12];
    c.bench_function("score_perfect_game", |b| {
        b.iter(|| score_rolls(black_box(&perfect)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = Game::new();
    for &pins in MIXED_GAME.iter() {
        game.roll(i32::from(pins));
    }
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            snap.score
        })
    });
}

criterion_group!(
    benches,
    bench_record_roll,
    bench_full_game,
    bench_resolve_frames,
    bench_score_rolls,
    bench_snapshot
);
criterion_main!(benches);
