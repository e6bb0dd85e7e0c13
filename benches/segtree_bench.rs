//! Throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lazy_segtree::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn operations(size: usize, count: usize) -> Vec<(usize, usize, i64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    (0..count)
        .map(|_| {
            let a = rng.gen_range(0..size);
            let b = rng.gen_range(0..size);
            (a.min(b), a.max(b), rng.gen_range(-100..=100))
        })
        .collect()
}

fn benchmark_lazy_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_tree");

    for size in [1 << 10, 1 << 16] {
        let ops = operations(size, 10_000);

        group.bench_with_input(BenchmarkId::new("update_query_sum", size), &ops, |b, ops| {
            b.iter(|| {
                let mut tree = UpdateTree::<Sum>::new(size);
                let mut checksum = 0i64;
                for (i, &(left, right, value)) in ops.iter().enumerate() {
                    if i % 2 == 0 {
                        let update = if i % 4 == 0 {
                            Update::Accumulate(value)
                        } else {
                            Update::Overwrite(value)
                        };
                        tree.update(left, right, update).unwrap();
                    } else {
                        checksum = checksum.wrapping_add(tree.query(left, right).unwrap());
                    }
                }
                black_box(checksum)
            });
        });

        group.bench_with_input(BenchmarkId::new("plain_set_fold_max", size), &ops, |b, ops| {
            b.iter(|| {
                let mut tree = SegmentTree::<Max>::new(size);
                let mut checksum = 0i64;
                for &(left, right, value) in ops {
                    tree.set(left, value).unwrap();
                    checksum = checksum.wrapping_add(tree.fold(left, right).unwrap());
                }
                black_box(checksum)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_lazy_tree);
criterion_main!(benches);
