//! AVX2 lane backend (256-bit, 4 × f64).
//!
//! Compiled when the build script emits `cfg(avx2)`, i.e. when the host CPU
//! reports AVX2 on a native build or `-C target-feature=+avx2` is set.

pub mod f64x4;
