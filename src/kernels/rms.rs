//! Root-mean-square reductions.
//!
//! Squares are accumulated in [`LANE_COUNT`](crate::LANE_COUNT) independent
//! lane sums; element `i` always lands in lane `i % LANE_COUNT` (counted from
//! the start of the array or window). The lane sums are added together once,
//! in lane order, after the loop. This interleaved order rounds differently
//! from a left-to-right sum and is kept stable across backends so results
//! are reproducible bit for bit.
//!
//! A ragged tail is loaded zero-padded: the padding squares to `+0.0` and
//! leaves every lane sum unchanged, while the divisor is always the real
//! element count.

use crate::aligned::AlignedBuffer;
use crate::error::Result;
use crate::simd::{Lane, SimdLane};

/// Lane-interleaved sum of squares of `input`.
#[inline(always)]
pub(crate) fn sum_of_squares<L: SimdLane>(input: &[f64]) -> f64 {
    let size = input.len();
    let step = L::LANE_COUNT;

    let nb_lanes = size - (size % step);

    let mut vsum = L::zero();

    for i in (0..nb_lanes).step_by(step) {
        let v = L::load(&input[i..i + step]);
        vsum += v * v;
    }

    if nb_lanes < size {
        let v = L::load_partial(&input[nb_lanes..]);
        vsum += v * v;
    }

    vsum.horizontal_sum()
}

#[inline(always)]
pub(crate) fn compute_rms_full_with<L: SimdLane>(input: &[f64]) -> f64 {
    (sum_of_squares::<L>(input) / input.len() as f64).sqrt()
}

#[inline(always)]
pub(crate) fn compute_rms_windowed_into_with<L: SimdLane>(
    input: &[f64],
    window: usize,
    out: &mut [f64],
) {
    assert!(window > 0, "window size must be non-zero");
    debug_assert_eq!(
        out.len(),
        num_windows(input.len(), window),
        "output length must equal the window count"
    );

    for (chunk, rms) in input.chunks(window).zip(out.iter_mut()) {
        // `chunk.len()` is the window's true element count (the last one may be short)
        *rms = (sum_of_squares::<L>(chunk) / chunk.len() as f64).sqrt();
    }
}

/// Number of windows of size `window` covering `n` elements: `ceil(n / window)`.
///
/// # Panics
///
/// Panics if `window` is zero.
#[inline(always)]
pub fn num_windows(n: usize, window: usize) -> usize {
    n.div_ceil(window)
}

/// RMS of the whole array: `sqrt(Σ input[i]² / n)`.
///
/// An empty input yields NaN (`0 / 0`); use
/// [`checked::compute_rms_full`](crate::kernels::checked::compute_rms_full)
/// to have it reported instead.
///
/// ```rust
/// use simdstat::compute_rms_full;
///
/// assert_eq!(compute_rms_full(&[-3.0; 8]), 3.0);
/// ```
pub fn compute_rms_full(input: &[f64]) -> f64 {
    compute_rms_full_with::<Lane>(input)
}

/// RMS of each consecutive `window`-sized chunk of `input`, written to `out`.
///
/// `out` must hold exactly [`num_windows`]`(input.len(), window)` values.
///
/// # Panics
///
/// Panics if `window` is zero.
pub fn compute_rms_windowed_into(input: &[f64], window: usize, out: &mut [f64]) {
    compute_rms_windowed_into_with::<Lane>(input, window, out)
}

/// RMS of each consecutive `window`-sized chunk of `input`.
///
/// Returns a new aligned buffer of `ceil(n / window)` values; the final
/// window may be shorter than `window` and is divided by its own length.
/// A `window` larger than the input yields a single value equal to
/// [`compute_rms_full`].
///
/// # Errors
///
/// Allocation failure of the output buffer.
///
/// # Panics
///
/// Panics if `window` is zero.
///
/// ```rust
/// use simdstat::compute_rms_windowed;
///
/// let input = [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 3.0, 3.0];
/// let rms = compute_rms_windowed(&input, 4).unwrap();
/// assert_eq!(&rms[..], &[1.0, 2.0, 3.0]);
/// ```
pub fn compute_rms_windowed(input: &[f64], window: usize) -> Result<AlignedBuffer> {
    assert!(window > 0, "window size must be non-zero");

    let mut out = AlignedBuffer::new(num_windows(input.len(), window))?;
    compute_rms_windowed_into(input, window, &mut out);

    log::debug!(
        "computed {} windowed RMS values over {} elements (window {})",
        out.len(),
        input.len(),
        window
    );

    Ok(out)
}
