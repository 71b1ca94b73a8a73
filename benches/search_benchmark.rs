extern crate numdiv;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numdiv::engine::*;
use numdiv::moves::*;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax 27648 depth 10", |b| {
        b.iter(|| {
            choose_move(black_box(27648), 0, 0, 0, Player::A, Algorithm::Minimax, Some(10))
        })
    });
    c.bench_function("alpha-beta 27648 depth 10", |b| {
        b.iter(|| {
            choose_move(black_box(27648), 0, 0, 0, Player::A, Algorithm::AlphaBeta, Some(10))
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
