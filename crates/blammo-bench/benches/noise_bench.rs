//! Benchmarks for noise evaluation and volume baking.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use blammo_core::CHANNELS;
use blammo_noise::{fractal_sum_3d, NoiseTables, PerlinNoise, ShuffleMode, StdRng, TableCache, VolumeOptions};
use rand::SeedableRng;

fn seeded_tables(frequency: u32) -> NoiseTables {
    let mut rng = StdRng::seed_from_u64(42);
    NoiseTables::generate(frequency, &mut rng, ShuffleMode::Uniform).expect("non-zero frequency")
}

/// Benchmark single-point noise evaluation.
fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    let tables = seeded_tables(256);

    for count in [1000usize, 10000, 100000].iter() {
        let points: Vec<(f64, f64, f64)> = (0..*count)
            .map(|i| {
                let t = i as f64;
                (t * 0.0131, t * 0.0217, t * 0.0073)
            })
            .collect();

        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("noise1", count), &points, |b, p| {
            b.iter(|| p.iter().map(|&(x, _, _)| tables.noise1(black_box(x))).sum::<f64>())
        });

        group.bench_with_input(BenchmarkId::new("noise2", count), &points, |b, p| {
            b.iter(|| p.iter().map(|&(x, y, _)| tables.noise2(black_box(x), black_box(y))).sum::<f64>())
        });

        group.bench_with_input(BenchmarkId::new("noise3", count), &points, |b, p| {
            b.iter(|| {
                p.iter()
                    .map(|&(x, y, z)| tables.noise3(black_box(x), black_box(y), black_box(z)))
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

/// Benchmark fractal sums by octave count.
fn bench_fractal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractal");
    let tables = seeded_tables(256);

    for octaves in [1u32, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::new("sum_3d", octaves), octaves, |b, &n| {
            b.iter(|| fractal_sum_3d(&tables, black_box(0.37), black_box(1.91), black_box(4.2), 2.0, 2.0, n))
        });
    }

    group.finish();
}

/// Benchmark table generation.
fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");

    for freq in [4u32, 32, 256].iter() {
        group.bench_with_input(BenchmarkId::new("generate", freq), freq, |b, &f| {
            b.iter(|| seeded_tables(black_box(f)))
        });
    }

    let cache = TableCache::new(1, ShuffleMode::Uniform);
    cache.tables(256).expect("non-zero frequency");
    group.bench_function("cache_hit", |b| b.iter(|| cache.tables(black_box(256))));

    group.finish();
}

/// Benchmark full four-octave volume bakes.
fn bench_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("volume");
    group.sample_size(10);

    for size in [16usize, 32, 64].iter() {
        group.throughput(Throughput::Bytes((size * size * size * CHANNELS) as u64));

        group.bench_with_input(BenchmarkId::new("generator", size), size, |b, &s| {
            let mut noise = PerlinNoise::seeded(7);
            b.iter(|| noise.build_noise_volume(black_box(s)))
        });

        let cache = TableCache::new(7, ShuffleMode::Uniform);
        let opts = VolumeOptions::with_size(*size);
        group.bench_with_input(BenchmarkId::new("cache", size), &opts, |b, o| {
            b.iter(|| cache.build_volume(black_box(o)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_noise, bench_fractal, bench_tables, bench_volume);

criterion_main!(benches);
