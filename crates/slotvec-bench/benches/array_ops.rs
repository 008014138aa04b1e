//! Criterion micro-benchmarks for dynamic array operations.
//!
//! The exact and geometric push benches make the cost of keeping no slack
//! visible: the former copies the whole array on every push.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use slotvec_array::{ArrayConfig, DynamicArray};
use slotvec_bench::{filled_array, fresh_arena};

/// Benchmark: 256 pushes with exact (reference) growth.
fn bench_push_exact_256(c: &mut Criterion) {
    c.bench_function("push_exact_256", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new(fresh_arena()).unwrap();
            for i in 0..256 {
                arr.push(black_box(i)).unwrap();
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: 256 pushes with geometric growth.
fn bench_push_geometric_256(c: &mut Criterion) {
    c.bench_function("push_geometric_256", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::with_config(fresh_arena(), ArrayConfig::geometric()).unwrap();
            for i in 0..256 {
                arr.push(black_box(i)).unwrap();
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: insert at the front then remove it again on a 1K array.
fn bench_insert_remove_front_1k(c: &mut Criterion) {
    let mut arr = filled_array(1024, ArrayConfig::geometric()).unwrap();
    c.bench_function("insert_remove_front_1k", |b| {
        b.iter(|| {
            arr.insert(0, black_box(-1)).unwrap();
            arr.remove(0).unwrap();
        });
    });
}

/// Benchmark: sequential reads across a 1K array.
fn bench_get_sequential_1k(c: &mut Criterion) {
    let arr = filled_array(1024, ArrayConfig::geometric()).unwrap();
    c.bench_function("get_sequential_1k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..arr.len() {
                sum += arr.get(i).unwrap();
            }
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_push_exact_256,
    bench_push_geometric_256,
    bench_insert_remove_front_1k,
    bench_get_sequential_1k
);
criterion_main!(benches);
