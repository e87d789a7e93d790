//! Performance benchmarks for the layered store.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use littledb::State;

fn populated(keys: usize) -> State {
    State::from_entries((0..keys).map(|i| (format!("key{}", i), format!("{}", i % 10))))
}

/// Benchmark lookups with varying transaction depth
fn bench_get_by_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_by_depth");

    for depth in [0, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut state = populated(1000);
            for _ in 0..depth {
                state = state.begin();
            }

            b.iter(|| {
                black_box(state.get("key500"));
            });
        });
    }

    group.finish();
}

/// Benchmark writes into a transaction layer of growing size
fn bench_set_in_transaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_in_transaction");

    for writes in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("writes", writes), &writes, |b, &writes| {
            let base = populated(1000).begin();

            b.iter(|| {
                let mut state = base.clone();
                for i in 0..writes {
                    state = state.set(format!("key{}", i), "x");
                }
                black_box(state);
            });
        });
    }

    group.finish();
}

/// Benchmark flattening chains of varying depth
fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut state = populated(1000);
            for level in 0..depth {
                state = state.begin().set(format!("key{}", level), "y");
            }

            b.iter(|| {
                black_box(state.commit());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_get_by_depth,
    bench_set_in_transaction,
    bench_commit
);
criterion_main!(benches);
