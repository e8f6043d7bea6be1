//! SIMD elementwise kernels against their scalar references and the
//! documented end-to-end examples.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdstat::kernels::scalar;
use simdstat::{
    add_vectors, compute_a_plus_bx, compute_abs_diff_sum, compute_abs_ratio, mul_vectors,
    square_vector, squared_difference, sub_vectors, AlignedBuffer,
};

type BinaryKernel = fn(&[f64], &[f64], &mut [f64]);

fn square_first(a: &[f64], _b: &[f64], result: &mut [f64]) {
    square_vector(a, result)
}

fn scalar_square_first(a: &[f64], _b: &[f64], result: &mut [f64]) {
    scalar::scalar_square_vector(a, result)
}

fn random_buffer(rng: &mut StdRng, len: usize) -> AlignedBuffer {
    let mut buf = AlignedBuffer::new(len).unwrap();
    buf.iter_mut()
        .for_each(|x| *x = rng.random_range(-1000.0..1000.0));
    buf
}

fn assert_bitwise_eq(simd: &[f64], scalar: &[f64], context: &str) {
    assert_eq!(simd.len(), scalar.len(), "{context}: length mismatch");
    for (i, (s, r)) in simd.iter().zip(scalar.iter()).enumerate() {
        assert!(
            s.to_bits() == r.to_bits() || (s.is_nan() && r.is_nan()),
            "{context}: index {i}: simd={s}, scalar={r}"
        );
    }
}

#[test]
fn test_binary_kernels_match_scalar_for_ragged_lengths() {
    let kernels: [(&str, BinaryKernel, BinaryKernel); 7] = [
        ("add", add_vectors, scalar::scalar_add_vectors),
        ("sub", sub_vectors, scalar::scalar_sub_vectors),
        ("mul", mul_vectors, scalar::scalar_mul_vectors),
        ("squared_difference", squared_difference, scalar::scalar_squared_difference),
        ("abs_ratio", compute_abs_ratio, scalar::scalar_abs_ratio),
        ("abs_diff_sum", compute_abs_diff_sum, scalar::scalar_abs_diff_sum),
        ("square(a)", square_first, scalar_square_first),
    ];

    let mut rng = StdRng::seed_from_u64(12345);

    for len in 1..=67 {
        let a = random_buffer(&mut rng, len);
        let b = random_buffer(&mut rng, len);

        for (name, simd, reference) in kernels {
            let mut simd_out = AlignedBuffer::new(len).unwrap();
            let mut scalar_out = AlignedBuffer::new(len).unwrap();
            simd(&a, &b, &mut simd_out);
            reference(&a, &b, &mut scalar_out);
            assert_bitwise_eq(&simd_out, &scalar_out, &format!("{name} len {len}"));
        }
    }
}

#[test]
fn test_kernels_on_unaligned_slices() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_buffer(&mut rng, 41);
    let b = random_buffer(&mut rng, 41);

    let mut simd_out = vec![0.0; 39];
    let mut scalar_out = vec![0.0; 39];
    squared_difference(&a[1..40], &b[2..41], &mut simd_out);
    scalar::scalar_squared_difference(&a[1..40], &b[2..41], &mut scalar_out);
    assert_bitwise_eq(&simd_out, &scalar_out, "unaligned squared_difference");
}

#[test]
fn test_add_vectors_end_to_end() {
    let n = 64;
    let mut a = AlignedBuffer::new(n).unwrap();
    let mut b = AlignedBuffer::new(n).unwrap();
    let mut result = AlignedBuffer::new(n).unwrap();

    for i in 0..n {
        a[i] = i as f64;
        b[i] = (n - i) as f64;
    }

    add_vectors(&a, &b, &mut result);
    assert!(result.iter().all(|&x| x == 64.0));
}

#[test]
fn test_a_plus_bx_end_to_end() {
    let x: Vec<f64> = (0..64).map(|i| i as f64).collect();
    let mut result = AlignedBuffer::new(64).unwrap();

    compute_a_plus_bx(10000.0, 2.0, &x, &mut result);

    for (i, &r) in result.iter().enumerate() {
        assert_eq!(r, 10000.0 + 2.0 * i as f64);
    }
}

#[test]
fn test_squared_difference_is_exact() {
    let a = [1.5, -2.25, 1e160, 3.0, -7.0];
    let b = [0.5, 2.25, -1e160, 3.0, 0.125];
    let mut result = [0.0; 5];
    squared_difference(&a, &b, &mut result);

    for i in 0..a.len() {
        assert_eq!(result[i], (a[i] - b[i]) * (a[i] - b[i]));
    }
    assert_eq!(result[2], f64::INFINITY);
}

#[test]
fn test_abs_ratio_properties() {
    let mut rng = StdRng::seed_from_u64(99);
    let a = random_buffer(&mut rng, 50);
    let b = random_buffer(&mut rng, 50);
    let mut result = AlignedBuffer::new(50).unwrap();

    compute_abs_ratio(&a, &b, &mut result);

    for i in 0..50 {
        assert_eq!(result[i], (a[i] + b[i]).abs() / (a[i].abs() + b[i].abs()));
        assert!((0.0..=1.0).contains(&result[i]));
    }

    let zeros = [0.0; 4];
    let mut nan_out = [0.0; 4];
    compute_abs_ratio(&zeros, &zeros, &mut nan_out);
    assert!(nan_out.iter().all(|x| x.is_nan()));
}

#[test]
fn test_square_then_sqrt_recovers_magnitude() {
    let x = [-3.0, 0.5, -0.0, 12.25, -1e-3, 7.0];
    let mut squared = [0.0; 6];
    square_vector(&x, &mut squared);

    for (s, v) in squared.iter().zip(x.iter()) {
        let recovered = s.abs().sqrt();
        assert!((recovered - v.abs()).abs() <= f64::EPSILON * v.abs());
    }
}

#[test]
fn test_special_values_propagate() {
    let a = [f64::NAN, f64::INFINITY, -f64::INFINITY, 0.0];
    let b = [1.0, -f64::INFINITY, 1.0, -0.0];
    let mut result = [0.0; 4];

    add_vectors(&a, &b, &mut result);
    assert!(result[0].is_nan());
    assert!(result[1].is_nan());
    assert_eq!(result[2], f64::NEG_INFINITY);
    assert_eq!(result[3], 0.0);

    compute_abs_diff_sum(&a, &b, &mut result);
    assert!(result[0].is_nan());
    assert_eq!(result[3].to_bits(), 0.0f64.to_bits());
}
