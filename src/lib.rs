//! SIMD-accelerated statistics kernels over `f64` buffers.
//!
//! The crate offers a fixed set of elementwise kernels (sums, differences,
//! products, squares, magnitude ratios, affine transforms) and root-mean-square
//! reductions over whole arrays or fixed-size windows. All of them are written
//! once against the [`simd::SimdLane`] abstraction; the build script selects
//! the AVX2, NEON or portable backend for the host.
//!
//! Buffers are plain slices. [`AlignedBuffer`] provides storage aligned to
//! [`BUFFER_ALIGNMENT`] and padded to whole lanes, which lets the kernels use
//! aligned loads and stores throughout.
//!
//! ```rust
//! use simdstat::{add_vectors, compute_rms_windowed, AlignedBuffer};
//!
//! let n = 64;
//! let mut a = AlignedBuffer::new(n).unwrap();
//! let mut b = AlignedBuffer::new(n).unwrap();
//! let mut result = AlignedBuffer::new(n).unwrap();
//!
//! for i in 0..n {
//!     a[i] = i as f64;
//!     b[i] = (n - i) as f64;
//! }
//!
//! add_vectors(&a, &b, &mut result);
//! assert!(result.iter().all(|&x| x == 64.0));
//!
//! let rms = compute_rms_windowed(&result, 10).unwrap();
//! assert_eq!(rms.len(), 7);
//! ```
//!
//! # Contracts
//!
//! The kernels in [`kernels`] do not validate their arguments beyond what
//! slice bounds checks enforce; see [`kernels::checked`] for variants that
//! report length, alignment, empty-input and zero-window violations as
//! [`SimdstatError::InvalidArgument`].

pub mod aligned;
pub mod error;
pub mod kernels;
pub mod simd;
pub mod traits;

pub use aligned::AlignedBuffer;
pub use error::{Result, SimdstatError};
pub use kernels::{
    add_vectors, compute_a_plus_bx, compute_abs_diff_sum, compute_abs_ratio, compute_rms_full,
    compute_rms_windowed, compute_rms_windowed_into, mul_vectors, num_windows, square_vector,
    squared_difference, sub_vectors,
};
pub use traits::SimdRms;

/// Number of `f64` values processed per lane batch, on every backend.
pub const LANE_COUNT: usize = 4;

/// Byte alignment of every [`AlignedBuffer`].
pub const BUFFER_ALIGNMENT: usize = 64;
