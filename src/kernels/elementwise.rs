//! Elementwise kernels over `f64` slices.
//!
//! Every kernel writes `result[0..n)` with `n = result.len()` and reads the
//! first `n` elements of each input. The slice is walked in strides of
//! [`LANE_COUNT`](crate::LANE_COUNT): full batches use aligned loads/stores
//! when the address permits, and the final `n % LANE_COUNT` elements go
//! through one zero-padded partial batch, so no length is out of contract.
//!
//! Inputs are expected to be at least `n` long; a shorter input panics on the
//! slice bound rather than reading past it. Misalignment only costs speed.
//!
//! # Example
//!
//! ```rust
//! use simdstat::{add_vectors, compute_a_plus_bx, AlignedBuffer};
//!
//! let a = AlignedBuffer::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! let b = AlignedBuffer::from_slice(&[5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
//! let mut result = AlignedBuffer::new(5).unwrap();
//!
//! add_vectors(&a, &b, &mut result);
//! assert_eq!(&result[..], &[6.0; 5]);
//!
//! compute_a_plus_bx(1.0, 0.5, &a, &mut result);
//! assert_eq!(&result[..], &[1.5, 2.0, 2.5, 3.0, 3.5]);
//! ```

use crate::simd::{Lane, SimdLane};

/// Drives a two-input lane operation across `result`.
#[inline(always)]
fn binary_kernel<L, F>(a: &[f64], b: &[f64], result: &mut [f64], op: F)
where
    L: SimdLane,
    F: Fn(L, L) -> L,
{
    let size = result.len();

    debug_assert!(
        a.len() >= size && b.len() >= size,
        "inputs ({}, {}) shorter than result ({size})",
        a.len(),
        b.len()
    );

    let step = L::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    for i in (0..nb_lanes).step_by(step) {
        let va = L::load(&a[i..i + step]);
        let vb = L::load(&b[i..i + step]);
        op(va, vb).store_at(&mut result[i..i + step]);
    }

    if rem_lanes > 0 {
        let va = L::load_partial(&a[nb_lanes..size]);
        let vb = L::load_partial(&b[nb_lanes..size]);
        op(va, vb).store_partial(&mut result[nb_lanes..size]);
    }
}

/// Drives a one-input lane operation across `result`.
#[inline(always)]
fn unary_kernel<L, F>(x: &[f64], result: &mut [f64], op: F)
where
    L: SimdLane,
    F: Fn(L) -> L,
{
    let size = result.len();

    debug_assert!(
        x.len() >= size,
        "input ({}) shorter than result ({size})",
        x.len()
    );

    let step = L::LANE_COUNT;

    let nb_lanes = size - (size % step);
    let rem_lanes = size - nb_lanes;

    for i in (0..nb_lanes).step_by(step) {
        op(L::load(&x[i..i + step])).store_at(&mut result[i..i + step]);
    }

    if rem_lanes > 0 {
        op(L::load_partial(&x[nb_lanes..size])).store_partial(&mut result[nb_lanes..size]);
    }
}

#[inline(always)]
pub(crate) fn add_vectors_with<L: SimdLane>(a: &[f64], b: &[f64], result: &mut [f64]) {
    binary_kernel::<L, _>(a, b, result, |va, vb| va + vb)
}

#[inline(always)]
pub(crate) fn sub_vectors_with<L: SimdLane>(a: &[f64], b: &[f64], result: &mut [f64]) {
    binary_kernel::<L, _>(a, b, result, |va, vb| va - vb)
}

#[inline(always)]
pub(crate) fn mul_vectors_with<L: SimdLane>(a: &[f64], b: &[f64], result: &mut [f64]) {
    binary_kernel::<L, _>(a, b, result, |va, vb| va * vb)
}

#[inline(always)]
pub(crate) fn square_vector_with<L: SimdLane>(input: &[f64], result: &mut [f64]) {
    unary_kernel::<L, _>(input, result, |v| v * v)
}

#[inline(always)]
pub(crate) fn squared_difference_with<L: SimdLane>(a: &[f64], b: &[f64], result: &mut [f64]) {
    binary_kernel::<L, _>(a, b, result, |va, vb| {
        let vdiff = va - vb;
        vdiff * vdiff
    })
}

#[inline(always)]
pub(crate) fn compute_abs_ratio_with<L: SimdLane>(a: &[f64], b: &[f64], result: &mut [f64]) {
    binary_kernel::<L, _>(a, b, result, |va, vb| {
        let vabs_sum = va.abs() + vb.abs();
        (va + vb).abs() / vabs_sum
    })
}

#[inline(always)]
pub(crate) fn compute_abs_diff_sum_with<L: SimdLane>(a: &[f64], b: &[f64], result: &mut [f64]) {
    binary_kernel::<L, _>(a, b, result, |va, vb| {
        let vdiff = (va + vb).abs() - va.abs() - vb.abs();
        vdiff.abs()
    })
}

#[inline(always)]
pub(crate) fn compute_a_plus_bx_with<L: SimdLane>(a: f64, b: f64, x: &[f64], result: &mut [f64]) {
    let va = L::splat(a);
    let vb = L::splat(b);
    unary_kernel::<L, _>(x, result, |vx| va + vb * vx)
}

/// `result[i] = a[i] + b[i]`
pub fn add_vectors(a: &[f64], b: &[f64], result: &mut [f64]) {
    add_vectors_with::<Lane>(a, b, result)
}

/// `result[i] = a[i] - b[i]`
pub fn sub_vectors(a: &[f64], b: &[f64], result: &mut [f64]) {
    sub_vectors_with::<Lane>(a, b, result)
}

/// `result[i] = a[i] * b[i]`
pub fn mul_vectors(a: &[f64], b: &[f64], result: &mut [f64]) {
    mul_vectors_with::<Lane>(a, b, result)
}

/// `result[i] = input[i]²`
pub fn square_vector(input: &[f64], result: &mut [f64]) {
    square_vector_with::<Lane>(input, result)
}

/// `result[i] = (a[i] - b[i])²`, computed as one difference squared.
pub fn squared_difference(a: &[f64], b: &[f64], result: &mut [f64]) {
    squared_difference_with::<Lane>(a, b, result)
}

/// `result[i] = |a[i] + b[i]| / (|a[i]| + |b[i]|)`
///
/// Lies in `[0, 1]` for finite inputs. Where both inputs are zero the
/// division is `0 / 0` and the lane is NaN; nothing traps.
pub fn compute_abs_ratio(a: &[f64], b: &[f64], result: &mut [f64]) {
    compute_abs_ratio_with::<Lane>(a, b, result)
}

/// `result[i] = ||a[i] + b[i]| - |a[i]| - |b[i]||`
///
/// Zero when `a[i]` and `b[i]` share a sign, `2 * min(|a|, |b|)` otherwise
/// (up to rounding).
pub fn compute_abs_diff_sum(a: &[f64], b: &[f64], result: &mut [f64]) {
    compute_abs_diff_sum_with::<Lane>(a, b, result)
}

/// Affine transform `result[i] = a + b * x[i]` with broadcast scalars.
pub fn compute_a_plus_bx(a: f64, b: f64, x: &[f64], result: &mut [f64]) {
    compute_a_plus_bx_with::<Lane>(a, b, x, result)
}
