use bucket_map::{MapContainer, PolyState};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

// xorshift64*; deterministic key stream per seed.
fn key_stream(seed: u64) -> impl Iterator<Item = String> {
    let mut x = seed | 1;
    std::iter::from_fn(move || {
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        Some(format!("key-{:x}", x.wrapping_mul(0x2545_f491_4f6c_dd1d)))
    })
}

fn bench_put_10k(c: &mut Criterion) {
    c.bench_function("bucket_map_put_10k", |b| {
        b.iter_batched(
            MapContainer::<String, u64>::new,
            |mut m| {
                for (i, k) in key_stream(1).take(10_000).enumerate() {
                    m.put(k, i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_put_sequential_ints(c: &mut Criterion) {
    c.bench_function("bucket_map_put_seq_u32_poly", |b| {
        b.iter_batched(
            || MapContainer::<u32, u32, PolyState>::with_hasher(PolyState),
            |mut m| {
                for k in 0..10_000u32 {
                    m.put(k, k);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get(c: &mut Criterion) {
    c.bench_function("bucket_map_get", |b| {
        let mut m = MapContainer::new();
        let keys: Vec<String> = key_stream(7).take(20_000).collect();
        for (i, k) in keys.iter().cloned().enumerate() {
            m.put(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_iterate(c: &mut Criterion) {
    c.bench_function("bucket_map_iterate_sparse", |b| {
        let mut m = MapContainer::new();
        for (i, k) in key_stream(11).take(1_000).enumerate() {
            m.put(k, i as u64);
        }
        b.iter(|| black_box(m.values().sum::<u64>()))
    });
}

fn short_runs() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(4))
}

criterion_group! {
    name = benches;
    config = short_runs();
    targets = bench_put_10k, bench_put_sequential_ints, bench_get, bench_iterate
}
criterion_main!(benches);
