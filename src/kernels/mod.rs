//! Vector kernels.
//!
//! - [`elementwise`]: `result[i] = f(a[i], b[i])` style kernels
//! - [`rms`]: whole-array and windowed root-mean-square reductions
//! - [`checked`]: the same operations with validated preconditions
//! - [`scalar`]: scalar reference implementations
//!
//! Kernels never call each other and keep no state between calls.

pub mod checked;
pub mod elementwise;
pub mod rms;
pub mod scalar;

pub use elementwise::{
    add_vectors, compute_a_plus_bx, compute_abs_diff_sum, compute_abs_ratio, mul_vectors,
    square_vector, squared_difference, sub_vectors,
};
pub use rms::{compute_rms_full, compute_rms_windowed, compute_rms_windowed_into, num_windows};
