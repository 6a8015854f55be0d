//! Solve-loop benchmarks.

use cellwise_solver::Board;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const EASY: &str = "\
    _23456789\
    4567_9123\
    789123456\
    23456789_\
    567891234\
    8912_4567\
    345678912\
    67891234_\
    912345678";

const WIKIPEDIA: &str = "\
    530070000\
    600195000\
    098000060\
    800060003\
    400803001\
    700020006\
    060000280\
    000419005\
    000080079";

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for (name, puzzle) in [("easy", EASY), ("wikipedia", WIKIPEDIA)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut board: Board = black_box(puzzle).parse().unwrap();
                board.start().unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
