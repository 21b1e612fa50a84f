extern crate criterion;

use criterion::measurement::WallTime;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkGroup, BenchmarkId, Criterion};
use min_priority_queue::{DualMapQueue, IndexedHeapQueue, MinPriorityQueue};
use std::hash::Hash;

mod generators;
use crate::generators::{
    gen_random_usizes, generate_worst_add_data, get_random_strings, get_unique_random_strings,
    unique_pairs,
};

fn bench_add_into<Q, K, P>(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    base: &[(K, P)],
    extra: &[(K, P)],
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
                for (k, v) in extra.iter().cloned() {
                    let _ = queue.add(k, v);
                }
                queue
            },
            BatchSize::LargeInput,
        );
    });
}

pub fn bench_add(c: &mut Criterion) {
    let base = unique_pairs(&gen_random_usizes(500_000, 0), &gen_random_usizes(500_000, 7));
    let extra: Vec<_> = gen_random_usizes(1000, 8)
        .into_iter()
        .zip(gen_random_usizes(1000, 20))
        .collect();

    let mut group = c.benchmark_group("add_usizes_random");
    for &size in &[100_000, 300_000, 500_000] {
        let base = &base[..size.min(base.len())];
        bench_add_into::<IndexedHeapQueue<_, _>, _, _>(&mut group, "IndexedHeapQueue", base, &extra);
        bench_add_into::<DualMapQueue<_, _>, _, _>(&mut group, "DualMapQueue", base, &extra);
    }
    group.finish();

    let base = unique_pairs(&get_random_strings(50_000, 0), &get_random_strings(50_000, 7));
    let extra: Vec<_> = get_random_strings(1000, 8)
        .into_iter()
        .zip(get_random_strings(1000, 20))
        .collect();

    let mut group = c.benchmark_group("add_strings_random");
    for &size in &[10_000, 30_000, 50_000] {
        let base = &base[..size.min(base.len())];
        bench_add_into::<IndexedHeapQueue<_, _>, _, _>(&mut group, "IndexedHeapQueue", base, &extra);
        bench_add_into::<DualMapQueue<_, _>, _, _>(&mut group, "DualMapQueue", base, &extra);
    }
    group.finish();

    // Every added item becomes new minimum
    let keys: Vec<usize> = (0..520_000).collect();
    let (base_values, extra_values) =
        generate_worst_add_data(gen_random_usizes(520_000, 7), 20_000, 987987);
    let base: Vec<_> = keys[..500_000].iter().cloned().zip(base_values).collect();
    let extra: Vec<_> = keys[500_000..].iter().cloned().zip(extra_values).collect();

    let mut group = c.benchmark_group("add_usizes_worst");
    for &size in &[100_000, 300_000, 500_000] {
        let base = &base[..size];
        bench_add_into::<IndexedHeapQueue<_, _>, _, _>(&mut group, "IndexedHeapQueue", base, &extra);
        bench_add_into::<DualMapQueue<_, _>, _, _>(&mut group, "DualMapQueue", base, &extra);
    }
    group.finish();

    let mut keys = get_unique_random_strings(55_000, 987987);
    let extra_keys = keys.split_off(50_000);
    let (base_values, extra_values) =
        generate_worst_add_data(get_unique_random_strings(55_000, 23423), 5_000, 987987);
    let base: Vec<_> = keys.into_iter().zip(base_values).collect();
    let extra: Vec<_> = extra_keys.into_iter().zip(extra_values).collect();

    let mut group = c.benchmark_group("add_strings_worst");
    for &size in &[10_000, 30_000, 50_000] {
        let base = &base[..size];
        bench_add_into::<IndexedHeapQueue<_, _>, _, _>(&mut group, "IndexedHeapQueue", base, &extra);
        bench_add_into::<DualMapQueue<_, _>, _, _>(&mut group, "DualMapQueue", base, &extra);
    }
    group.finish();
}

criterion_group!(benches, bench_add);
criterion_main!(benches);
