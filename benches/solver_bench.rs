use criterion::{criterion_group, criterion_main, Criterion};
use passforge::config::{SearchParams, WordReuse};
use passforge::layouts::KnownLayout;
use passforge::optimizer::Optimizer;
use passforge::scorer::DistanceTable;
use std::hint::black_box;

fn random_words(seed: u64, count: usize, max_len: usize) -> Vec<String> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let len = rng.usize(1..=max_len);
            (0..len).map(|_| rng.lowercase()).collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let layout = KnownLayout::Qwerty
        .to_layout()
        .expect("qwerty preset is valid");
    let table = DistanceTable::build(&layout).expect("qwerty is connected");

    let big = random_words(42, 20_000, 10);
    let default = Optimizer::new(&table, SearchParams::default()).expect("defaults are valid");
    c.bench_function("solve 4 words (20k dictionary)", |b| {
        b.iter(|| default.solve(black_box(&big)))
    });

    let sequential = Optimizer::new(
        &table,
        SearchParams {
            parallel: false,
            ..Default::default()
        },
    )
    .expect("defaults are valid");
    c.bench_function("solve 4 words sequential (20k dictionary)", |b| {
        b.iter(|| sequential.solve(black_box(&big)))
    });

    let small = random_words(7, 60, 6);
    let distinct = Optimizer::new(
        &table,
        SearchParams {
            word_count: 3,
            min_len: 10,
            max_len: 12,
            reuse: WordReuse::Forbidden,
            ..Default::default()
        },
    )
    .expect("params are valid");
    c.bench_function("solve 3 distinct words (60 dictionary)", |b| {
        b.iter(|| distinct.solve(black_box(&small)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
