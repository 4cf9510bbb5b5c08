// In benches/codec_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use ufloat8::kernels::{compress, decode, encode, uncompress};

// --- Mock Data Generation ---

/// Uniform magnitudes across the whole 16-bit range.
fn generate_uniform_magnitudes(size: usize) -> Vec<u16> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random::<u16>()).collect()
}

/// Small magnitudes, where the encoder takes the truncating path.
fn generate_small_magnitudes(size: usize) -> Vec<u16> {
    let mut rng = rand::rng();
    (0..size).map(|_| rng.random_range(0..32u16)).collect()
}

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 65536;

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scalar Codec");

    group.bench_function("compress all u16", |b| {
        b.iter(|| {
            for magnitude in 0..=u16::MAX {
                black_box(compress(black_box(magnitude)));
            }
        })
    });
    group.bench_function("uncompress all u8", |b| {
        b.iter(|| {
            for code in 0..=u8::MAX {
                black_box(uncompress(black_box(code)));
            }
        })
    });

    group.finish();
}

fn bench_slice_kernels(c: &mut Criterion) {
    let uniform = generate_uniform_magnitudes(BENCH_DATA_SIZE);
    let small = generate_small_magnitudes(BENCH_DATA_SIZE);

    let mut encoded_uniform = Vec::new();
    encode(&uniform, &mut encoded_uniform).unwrap();

    let mut group = c.benchmark_group("Slice Kernels");
    group.throughput(criterion::Throughput::Elements(BENCH_DATA_SIZE as u64));

    let mut out = Vec::with_capacity(BENCH_DATA_SIZE * 2);
    group.bench_function("Encode (Uniform)", |b| {
        b.iter(|| black_box(encode(black_box(&uniform), &mut out)))
    });
    group.bench_function("Encode (Small)", |b| {
        b.iter(|| black_box(encode(black_box(&small), &mut out)))
    });
    group.bench_function("Decode (Uniform)", |b| {
        b.iter(|| black_box(decode(black_box(&encoded_uniform), &mut out)))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_slice_kernels);
criterion_main!(benches);
