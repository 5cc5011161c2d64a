//! Benchmarks for multiway-index using criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multiway_index::MultiwayIndex;

fn build(size: i64, fan_out: usize) -> MultiwayIndex<i64, u64> {
    let mut tree: MultiwayIndex<i64, u64> = MultiwayIndex::new(fan_out);
    for i in 0..size {
        tree.put(i, i as u64).unwrap();
    }
    tree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiway_insert");

    for fan_out in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(fan_out), &fan_out, |b, &fan_out| {
            b.iter(|| black_box(build(10_000, fan_out)));
        });
    }

    group.finish();
}

fn shuffled_insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiway_insert_shuffled");

    // Fixed permutation of 0..10000 so runs are comparable.
    let keys: Vec<i64> = (0..10_000i64).map(|i| (i * 7_919) % 10_000).collect();

    for fan_out in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(fan_out), &fan_out, |b, &fan_out| {
            b.iter(|| {
                let mut tree: MultiwayIndex<i64, u64> = MultiwayIndex::new(fan_out);
                for &key in &keys {
                    tree.put(key, key as u64).unwrap();
                }
                black_box(tree)
            });
        });
    }

    group.finish();
}

fn get_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiway_get");

    for size in [100i64, 1000, 10000] {
        let tree = build(size, 16);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                for i in (0..100).map(|x| x * size / 100) {
                    black_box(tree.get(&i).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn serialize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiway_serialize");

    for size in [1000i64, 10000, 100000] {
        let tree = build(size, 16);

        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| black_box(tree.serialize()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    insert_benchmark,
    shuffled_insert_benchmark,
    get_benchmark,
    serialize_benchmark
);
criterion_main!(benches);
