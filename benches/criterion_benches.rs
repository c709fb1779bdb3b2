#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use eight_puzzle::config::Config;
use eight_puzzle::{LoadGrid, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_example(c: &mut Criterion) {
    // 24 moves
    bench_puzzle(c, "puzzles/02-example.txt", 100);
}

#[allow(unused)]
fn bench_hardest(c: &mut Criterion) {
    // 31 moves, the maximum
    bench_puzzle(c, "puzzles/31-hardest.txt", 20);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    // exhausts every reachable state
    bench_puzzle(c, "puzzles/no-solution.txt", 10);
}

fn bench_puzzle(c: &mut Criterion, puzzle_path: &str, samples: usize) {
    let grid = puzzle_path.load_grid().unwrap();
    let config = Config::default();

    c.bench(
        "a-star",
        Benchmark::new(puzzle_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    grid.solve(criterion::black_box(&config), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_example,
    bench_hardest,
    //bench_no_solution,
);
criterion_main!(benches);
