// Criterion benchmarks for fsm-generators.
//
// Run:
//   cargo bench -p fsm-generators

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fsm_generators::{FailureStrategy, SubblockCounterBuilder, make_identity};

/// Block with long self-overlap, the worst case for rescanning.
fn periodic_block(len: usize) -> Vec<u8> {
    (0..len).map(|i| if i + 1 == len { 1 } else { 0 }).collect()
}

/// Deterministic pseudo-random input over {0, 1, 2}.
fn input(len: usize) -> Vec<u8> {
    let mut x: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x % 3) as u8
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let block = periodic_block(64);
    c.bench_function("build_rescan_64", |b| {
        b.iter(|| {
            SubblockCounterBuilder::new(black_box(block.clone()))
                .build([0, 1, 2])
                .unwrap()
        })
    });
    c.bench_function("build_prefix_table_64", |b| {
        b.iter(|| {
            SubblockCounterBuilder::new(black_box(block.clone()))
                .strategy(FailureStrategy::PrefixTable)
                .build([0, 1, 2])
                .unwrap()
        })
    });
}

fn bench_apply(c: &mut Criterion) {
    let counter = SubblockCounterBuilder::new([1u8, 0, 1, 0])
        .build([0, 1, 2])
        .unwrap();
    let identity = make_identity([0u8, 1, 2]).unwrap();
    let data = input(100_000);

    c.bench_function("apply_counter_100k", |b| {
        b.iter(|| counter.apply(black_box(&data)).unwrap())
    });
    c.bench_function("apply_identity_100k", |b| {
        b.iter(|| identity.apply(black_box(&data)).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_apply);
criterion_main!(benches);
