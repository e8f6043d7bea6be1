//! Checked kernel entry points.
//!
//! Same operations as the unchecked kernels, but every precondition is
//! validated up front and reported as
//! [`SimdstatError::InvalidArgument`](crate::SimdstatError::InvalidArgument)
//! instead of panicking or producing NaN:
//!
//! - all buffers of one call have the same length;
//! - every non-empty buffer starts on a [`BUFFER_ALIGNMENT`] boundary;
//! - RMS inputs are non-empty and window sizes non-zero;
//! - windowed outputs hold exactly one slot per window.
//!
//! The unchecked kernels are called unchanged once validation passes.
//!
//! ```rust
//! use simdstat::kernels::checked;
//! use simdstat::{AlignedBuffer, SimdstatError};
//!
//! let a = AlignedBuffer::from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! let b = AlignedBuffer::from_slice(&[1.0, 2.0]).unwrap();
//! let mut out = AlignedBuffer::new(3).unwrap();
//!
//! let err = checked::add_vectors(&a, &b, &mut out).unwrap_err();
//! assert!(matches!(err, SimdstatError::InvalidArgument { .. }));
//! ```

use crate::aligned::{is_buffer_aligned, AlignedBuffer};
use crate::error::{invalid_argument, Result};
use crate::kernels::{elementwise, rms};
use crate::BUFFER_ALIGNMENT;

fn reject<T>(message: String) -> Result<T> {
    log::debug!("rejected kernel call: {message}");
    Err(invalid_argument(message))
}

fn check_aligned(name: &str, data: &[f64]) -> Result<()> {
    if !data.is_empty() && !is_buffer_aligned(data.as_ptr()) {
        return reject(format!(
            "`{name}` at {:p} is not aligned to {BUFFER_ALIGNMENT} bytes",
            data.as_ptr()
        ));
    }
    Ok(())
}

fn check_same_len(name: &str, data: &[f64], expected: usize) -> Result<()> {
    if data.len() != expected {
        return reject(format!(
            "`{name}` has {} elements, expected {expected}",
            data.len()
        ));
    }
    Ok(())
}

fn check_binary(a: &[f64], b: &[f64], result: &[f64]) -> Result<()> {
    check_same_len("b", b, a.len())?;
    check_same_len("result", result, a.len())?;
    check_aligned("a", a)?;
    check_aligned("b", b)?;
    check_aligned("result", result)
}

fn check_unary(input: &[f64], result: &[f64]) -> Result<()> {
    check_same_len("result", result, input.len())?;
    check_aligned("input", input)?;
    check_aligned("result", result)
}

fn check_rms_input(input: &[f64]) -> Result<()> {
    if input.is_empty() {
        return reject("RMS of an empty input is undefined".to_string());
    }
    check_aligned("input", input)
}

fn check_window(window: usize) -> Result<()> {
    if window == 0 {
        return reject("window size must be non-zero".to_string());
    }
    Ok(())
}

pub fn add_vectors(a: &[f64], b: &[f64], result: &mut [f64]) -> Result<()> {
    check_binary(a, b, result)?;
    elementwise::add_vectors(a, b, result);
    Ok(())
}

pub fn sub_vectors(a: &[f64], b: &[f64], result: &mut [f64]) -> Result<()> {
    check_binary(a, b, result)?;
    elementwise::sub_vectors(a, b, result);
    Ok(())
}

pub fn mul_vectors(a: &[f64], b: &[f64], result: &mut [f64]) -> Result<()> {
    check_binary(a, b, result)?;
    elementwise::mul_vectors(a, b, result);
    Ok(())
}

pub fn square_vector(input: &[f64], result: &mut [f64]) -> Result<()> {
    check_unary(input, result)?;
    elementwise::square_vector(input, result);
    Ok(())
}

pub fn squared_difference(a: &[f64], b: &[f64], result: &mut [f64]) -> Result<()> {
    check_binary(a, b, result)?;
    elementwise::squared_difference(a, b, result);
    Ok(())
}

pub fn compute_abs_ratio(a: &[f64], b: &[f64], result: &mut [f64]) -> Result<()> {
    check_binary(a, b, result)?;
    elementwise::compute_abs_ratio(a, b, result);
    Ok(())
}

pub fn compute_abs_diff_sum(a: &[f64], b: &[f64], result: &mut [f64]) -> Result<()> {
    check_binary(a, b, result)?;
    elementwise::compute_abs_diff_sum(a, b, result);
    Ok(())
}

pub fn compute_a_plus_bx(a: f64, b: f64, x: &[f64], result: &mut [f64]) -> Result<()> {
    check_unary(x, result)?;
    elementwise::compute_a_plus_bx(a, b, x, result);
    Ok(())
}

pub fn compute_rms_full(input: &[f64]) -> Result<f64> {
    check_rms_input(input)?;
    Ok(rms::compute_rms_full(input))
}

pub fn compute_rms_windowed(input: &[f64], window: usize) -> Result<AlignedBuffer> {
    check_window(window)?;
    check_rms_input(input)?;
    rms::compute_rms_windowed(input, window)
}

pub fn compute_rms_windowed_into(input: &[f64], window: usize, out: &mut [f64]) -> Result<()> {
    check_window(window)?;
    check_rms_input(input)?;
    check_same_len("out", out, rms::num_windows(input.len(), window))?;
    rms::compute_rms_windowed_into(input, window, out);
    Ok(())
}
