//! Portable lane backend.
//!
//! Emulates a 4 × f64 register with a plain array so the kernels build on
//! any target. It is always compiled; it is the active [`crate::simd::Lane`]
//! only when neither AVX2 nor NEON was selected (or the `portable` feature is
//! on). Because every operation is per-lane IEEE arithmetic, results match
//! the hardware backends bit for bit.

pub mod f64x4;
