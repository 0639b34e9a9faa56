//! Criterion micro-benchmarks for slot allocation, trim, and handle resolution.

use chainalloc::ChainAllocator;
use chainalloc_bench::{huge_block_profile, record_profile};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark: allocate 10K record slots, spanning ~15 blocks.
fn bench_alloc_10k(c: &mut Criterion) {
    c.bench_function("chain_alloc_10k", |b| {
        b.iter(|| {
            let mut chain = ChainAllocator::new(record_profile()).unwrap();
            for _ in 0..10_000 {
                black_box(chain.alloc().unwrap());
            }
            black_box(chain.block_count());
        });
    });
}

/// Benchmark: full fill-then-drain cycle of 10K slots.
fn bench_alloc_trim_cycle_10k(c: &mut Criterion) {
    c.bench_function("chain_alloc_trim_cycle_10k", |b| {
        b.iter(|| {
            let mut chain = ChainAllocator::new(record_profile()).unwrap();
            for _ in 0..10_000 {
                chain.alloc().unwrap();
            }
            while !chain.is_empty() {
                chain.trim();
            }
            black_box(chain.memory_bytes());
        });
    });
}

/// Benchmark: resolve and write through handles on a pre-filled chain.
fn bench_slot_write_10k(c: &mut Criterion) {
    let mut chain = ChainAllocator::new(record_profile()).unwrap();
    let handles: Vec<_> = (0..10_000).map(|_| chain.alloc().unwrap()).collect();

    c.bench_function("chain_slot_write_10k", |b| {
        b.iter(|| {
            for (i, &h) in handles.iter().enumerate() {
                chain.slot_mut(h)[0] = i as u8;
            }
            black_box(chain.slot(handles[0])[0]);
        });
    });
}

/// Benchmark: block growth on the exact-fit (Huge) acquisition path.
fn bench_huge_block_growth(c: &mut Criterion) {
    let profile = huge_block_profile();
    let slots = {
        let chain = ChainAllocator::new(profile.clone()).unwrap();
        chain.slots_per_block() as usize
    };
    c.bench_function("chain_huge_block_growth", |b| {
        b.iter(|| {
            let mut chain = ChainAllocator::new(profile.clone()).unwrap();
            // First slot of each of 4 blocks forces 4 acquisitions.
            for _ in 0..4 {
                for _ in 0..slots {
                    chain.alloc().unwrap();
                }
            }
            black_box(chain.memory_bytes());
        });
    });
}

criterion_group!(
    benches,
    bench_alloc_10k,
    bench_alloc_trim_cycle_10k,
    bench_slot_write_10k,
    bench_huge_block_growth
);
criterion_main!(benches);
