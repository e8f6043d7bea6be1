//! Scalar reference implementations.
//!
//! Plain iterator loops with the same per-element operation order as the
//! SIMD kernels, used for verification and as the baseline in benchmarks.
//! Elementwise results are bit-identical to the SIMD kernels. The RMS
//! functions sum sequentially and therefore only agree within rounding.

pub fn scalar_add_vectors(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, x), y) in result.iter_mut().zip(a).zip(b) {
        *r = x + y;
    }
}

pub fn scalar_sub_vectors(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, x), y) in result.iter_mut().zip(a).zip(b) {
        *r = x - y;
    }
}

pub fn scalar_mul_vectors(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, x), y) in result.iter_mut().zip(a).zip(b) {
        *r = x * y;
    }
}

pub fn scalar_square_vector(input: &[f64], result: &mut [f64]) {
    for (r, x) in result.iter_mut().zip(input) {
        *r = x * x;
    }
}

pub fn scalar_squared_difference(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, x), y) in result.iter_mut().zip(a).zip(b) {
        let diff = x - y;
        *r = diff * diff;
    }
}

pub fn scalar_abs_ratio(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, x), y) in result.iter_mut().zip(a).zip(b) {
        *r = (x + y).abs() / (x.abs() + y.abs());
    }
}

pub fn scalar_abs_diff_sum(a: &[f64], b: &[f64], result: &mut [f64]) {
    for ((r, x), y) in result.iter_mut().zip(a).zip(b) {
        *r = ((x + y).abs() - x.abs() - y.abs()).abs();
    }
}

pub fn scalar_a_plus_bx(a: f64, b: f64, x: &[f64], result: &mut [f64]) {
    for (r, v) in result.iter_mut().zip(x) {
        *r = a + b * v;
    }
}

pub fn scalar_rms_full(input: &[f64]) -> f64 {
    let sum: f64 = input.iter().map(|x| x * x).sum();
    (sum / input.len() as f64).sqrt()
}

/// # Panics
///
/// Panics if `window` is zero.
pub fn scalar_rms_windowed(input: &[f64], window: usize) -> Vec<f64> {
    input.chunks(window).map(scalar_rms_full).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_rms_full() {
        assert_eq!(scalar_rms_full(&[3.0, 4.0]), (12.5f64).sqrt());
        assert_eq!(scalar_rms_full(&[-2.0; 5]), 2.0);
    }

    #[test]
    fn test_scalar_rms_windowed_ragged() {
        let rms = scalar_rms_windowed(&[1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0], 4);
        assert_eq!(rms, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_scalar_abs_ratio() {
        let mut r = [0.0; 2];
        scalar_abs_ratio(&[1.0, 0.0], &[-3.0, 0.0], &mut r);
        assert_eq!(r[0], 0.5);
        assert!(r[1].is_nan());
    }
}
