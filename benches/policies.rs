//! Criterion benchmarks for the replacement policies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{FrameCapacity, PageId, Policy};

/// Deterministic pseudo-random trace over `distinct` pages.
fn trace(len: usize, distinct: i64, seed: u64) -> Vec<PageId> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            PageId((state % distinct as u64) as i64)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let pages = trace(10_000, 256, 42);

    for policy in Policy::ALL {
        let mut group = c.benchmark_group(policy.label());

        for frames in [4usize, 32, 128] {
            let capacity = FrameCapacity::new(frames).expect("non-zero");
            group.bench_with_input(BenchmarkId::new("frames", frames), &capacity, |b, &cap| {
                b.iter(|| policy.run(black_box(&pages), cap).fault_count());
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
