use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdstat::kernels::scalar;
use simdstat::{
    add_vectors, compute_abs_ratio, compute_rms_full, compute_rms_windowed, AlignedBuffer,
};

// ====================================================================================
// --- Configuration: sizes chosen to cover the cache hierarchy ---
// ====================================================================================

/// An f64 is 8 bytes: 4 KiB fits in L1, 256 KiB in L2, 8 MiB in L3 and
/// 64 MiB spills to RAM.
const VECTOR_SIZES: &[usize] = &[
    512,             // 4 KiB
    32 * 1024,       // 256 KiB
    1024 * 1024,     // 8 MiB
    8 * 1024 * 1024, // 64 MiB
];

const RMS_WINDOW: usize = 1000;

/// Fixed-seed data so runs stay comparable.
fn generate_random_data(len: usize) -> (AlignedBuffer, AlignedBuffer) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut a = AlignedBuffer::new(len).expect("benchmark allocation");
    let mut b = AlignedBuffer::new(len).expect("benchmark allocation");
    a.iter_mut().for_each(|x| *x = rng.random::<f64>() * 2.0 - 1.0);
    b.iter_mut().for_each(|x| *x = rng.random::<f64>() * 2.0 - 1.0);
    (a, b)
}

fn all_benchmarks(c: &mut Criterion) {
    // --- Elementwise addition ---
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("Addition");
        group.throughput(Throughput::Bytes(
            size as u64 * std::mem::size_of::<f64>() as u64,
        ));

        let (a, b) = generate_random_data(size);
        let mut out = AlignedBuffer::new(size).expect("benchmark allocation");

        group.bench_with_input(BenchmarkId::new("scalar", size), &a, |bench, a| {
            bench.iter(|| scalar::scalar_add_vectors(black_box(a), black_box(&b), &mut out))
        });

        group.bench_with_input(BenchmarkId::new("simd", size), &a, |bench, a| {
            bench.iter(|| add_vectors(black_box(a), black_box(&b), &mut out))
        });

        let a_arr = Array1::from_vec(a.to_vec());
        let b_arr = Array1::from_vec(b.to_vec());
        group.bench_with_input(BenchmarkId::new("ndarray", size), &a_arr, |bench, a| {
            bench.iter(|| black_box(a + &b_arr))
        });

        group.finish();
    }

    // --- Magnitude ratio (division-bound) ---
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("AbsRatio");
        group.throughput(Throughput::Elements(size as u64));

        let (a, b) = generate_random_data(size);
        let mut out = AlignedBuffer::new(size).expect("benchmark allocation");

        group.bench_with_input(BenchmarkId::new("scalar", size), &a, |bench, a| {
            bench.iter(|| scalar::scalar_abs_ratio(black_box(a), black_box(&b), &mut out))
        });

        group.bench_with_input(BenchmarkId::new("simd", size), &a, |bench, a| {
            bench.iter(|| compute_abs_ratio(black_box(a), black_box(&b), &mut out))
        });

        group.finish();
    }

    // --- RMS reductions ---
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("Rms");
        group.throughput(Throughput::Elements(size as u64));

        let (a, _) = generate_random_data(size);

        group.bench_with_input(BenchmarkId::new("scalar full", size), &a, |bench, a| {
            bench.iter(|| black_box(scalar::scalar_rms_full(black_box(a))))
        });

        group.bench_with_input(BenchmarkId::new("simd full", size), &a, |bench, a| {
            bench.iter(|| black_box(compute_rms_full(black_box(a))))
        });

        group.bench_with_input(BenchmarkId::new("scalar windowed", size), &a, |bench, a| {
            bench.iter(|| black_box(scalar::scalar_rms_windowed(black_box(a), RMS_WINDOW)))
        });

        group.bench_with_input(BenchmarkId::new("simd windowed", size), &a, |bench, a| {
            bench.iter(|| black_box(compute_rms_windowed(black_box(a), RMS_WINDOW)))
        });

        group.finish();
    }
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
