extern crate criterion;

use criterion::measurement::WallTime;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkGroup, BenchmarkId, Criterion};
use min_priority_queue::{DualMapQueue, IndexedHeapQueue, MinPriorityQueue, UnsortedArrayQueue};
use std::hash::Hash;

mod generators;
use crate::generators::{gen_random_usizes, get_random_strings, unique_pairs};

fn bench_remove_min_from<Q, K, P>(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    base: &[(K, P)],
    removals: usize,
) where
    Q: MinPriorityQueue<K, P> + FromIterator<(K, P)> + Clone,
    K: Hash + Eq + Clone,
    P: Ord + Clone,
{
    let base_queue: Q = base.iter().cloned().collect();
    group.bench_with_input(BenchmarkId::new(name, base.len()), &base.len(), |b, _| {
        b.iter_batched(
            || base_queue.clone(),
            |mut queue| {
                for _ in 0..removals {
                    let _ = queue.remove_min();
                }
                queue
            },
            BatchSize::SmallInput,
        );
    });
}

pub fn bench_remove_min(c: &mut Criterion) {
    let base = unique_pairs(&gen_random_usizes(500_000, 0), &gen_random_usizes(500_000, 7));

    let mut group = c.benchmark_group("remove_min_usize");
    for &size in &[100_000, 300_000, 500_000] {
        let base = &base[..size.min(base.len())];
        bench_remove_min_from::<IndexedHeapQueue<_, _>, _, _>(&mut group, "IndexedHeapQueue", base, 1000);
        bench_remove_min_from::<DualMapQueue<_, _>, _, _>(&mut group, "DualMapQueue", base, 1000);
    }
    group.finish();

    let base = unique_pairs(&get_random_strings(50_000, 0), &get_random_strings(50_000, 7));

    let mut group = c.benchmark_group("remove_min_string");
    for &size in &[10_000, 30_000, 50_000] {
        let base = &base[..size.min(base.len())];
        bench_remove_min_from::<IndexedHeapQueue<_, _>, _, _>(&mut group, "IndexedHeapQueue", base, 1000);
        bench_remove_min_from::<DualMapQueue<_, _>, _, _>(&mut group, "DualMapQueue", base, 1000);
    }
    group.finish();

    // Linear queue is compared only on small inputs
    let base = unique_pairs(&gen_random_usizes(5_000, 0), &gen_random_usizes(5_000, 7));

    let mut group = c.benchmark_group("remove_min_usize_small");
    for &size in &[1_000, 5_000] {
        let base = &base[..size.min(base.len())];
        bench_remove_min_from::<IndexedHeapQueue<_, _>, _, _>(&mut group, "IndexedHeapQueue", base, 100);
        bench_remove_min_from::<DualMapQueue<_, _>, _, _>(&mut group, "DualMapQueue", base, 100);
        bench_remove_min_from::<UnsortedArrayQueue<_, _>, _, _>(&mut group, "UnsortedArrayQueue", base, 100);
    }
    group.finish();
}

criterion_group!(benches, bench_remove_min);
criterion_main!(benches);
