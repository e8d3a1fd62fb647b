use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recentkit::RecencyStore;

const CAPACITY: usize = 1024;

fn filled(capacity: usize) -> RecencyStore<u64, u64> {
    let mut store = RecencyStore::new(capacity);
    for i in 0..capacity as u64 {
        store.insert(i, i);
    }
    store
}

fn bench_recency_insert_promote(c: &mut Criterion) {
    c.bench_function("recency_insert_promote", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut store| {
                for i in 0..CAPACITY as u64 {
                    store.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(store.get_and_promote(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_recency_refresh_full(c: &mut Criterion) {
    c.bench_function("recency_refresh_full", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut store| {
                for i in 0..CAPACITY as u64 {
                    store.insert(std::hint::black_box(i), i + 1);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_recency_eviction_churn(c: &mut Criterion) {
    c.bench_function("recency_eviction_churn", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut store| {
                for i in 0..4 * CAPACITY as u64 {
                    store.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_recency_random_mix(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let ops: Vec<(u8, u64)> = (0..8192)
        .map(|_| (rng.gen_range(0..10), rng.gen_range(0..2 * CAPACITY as u64)))
        .collect();

    c.bench_function("recency_random_mix", |b| {
        b.iter_batched(
            || filled(CAPACITY),
            |mut store| {
                for &(op, key) in &ops {
                    match op {
                        0..=5 => {
                            let _ = std::hint::black_box(store.get_and_promote(&key));
                        },
                        6..=8 => store.insert(key, key),
                        _ => store.remove(&key),
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_recency_insert_promote,
    bench_recency_refresh_full,
    bench_recency_eviction_churn,
    bench_recency_random_mix
);
criterion_main!(benches);
