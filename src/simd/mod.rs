//! SIMD lane backends.
//!
//! Every kernel is written once against [`SimdLane`]; the build script picks
//! the concrete backend and [`Lane`] aliases it:
//!
//! | cfg        | backend                 | register          |
//! |------------|-------------------------|-------------------|
//! | `avx2`     | [`avx2::f64x4::F64x4`]  | `__m256d`         |
//! | `neon`     | [`neon::f64x4::F64x4`]  | 2 × `float64x2_t` |
//! | otherwise  | [`fallback::f64x4::F64x4`] | `[f64; 4]`     |

#[cfg(avx2)]
pub mod avx2;

#[cfg(neon)]
pub mod neon;

pub mod fallback;

pub mod traits;

pub use traits::SimdLane;

#[cfg(avx2)]
pub type Lane = avx2::f64x4::F64x4;

#[cfg(all(neon, not(avx2)))]
pub type Lane = neon::f64x4::F64x4;

#[cfg(not(any(avx2, neon)))]
pub type Lane = fallback::f64x4::F64x4;

/// Name of the backend [`Lane`] resolves to.
#[cfg(avx2)]
pub const BACKEND: &str = "avx2";

#[cfg(all(neon, not(avx2)))]
pub const BACKEND: &str = "neon";

#[cfg(not(any(avx2, neon)))]
pub const BACKEND: &str = "fallback";
