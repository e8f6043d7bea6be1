//! NEON 4-lane f64 vector built from two `float64x2_t` registers.

use std::arch::aarch64::*;

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::simd::traits::SimdLane;

/// NEON memory alignment requirement in bytes.
pub(crate) const NEON_ALIGNMENT: usize = 16;

/// NEON SIMD vector containing 4 packed f64 values (`lo` = lanes 0..2).
#[derive(Copy, Clone, Debug)]
pub struct F64x4 {
    pub(crate) lo: float64x2_t,
    pub(crate) hi: float64x2_t,
}

impl SimdLane for F64x4 {
    const ALIGNMENT: usize = NEON_ALIGNMENT;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        unsafe {
            Self {
                lo: vdupq_n_f64(value),
                hi: vdupq_n_f64(value),
            }
        }
    }

    // vld1q_f64 has no alignment requirement
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self {
        Self::load_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        Self {
            lo: vld1q_f64(ptr),
            hi: vld1q_f64(ptr.add(2)),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned(&self, ptr: *mut f64) {
        self.store_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn store_unaligned(&self, ptr: *mut f64) {
        vst1q_f64(ptr, self.lo);
        vst1q_f64(ptr.add(2), self.hi);
    }

    #[inline(always)]
    fn abs(&self) -> Self {
        unsafe {
            Self {
                lo: vabsq_f64(self.lo),
                hi: vabsq_f64(self.hi),
            }
        }
    }
}

impl Add for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        unsafe {
            Self {
                lo: vaddq_f64(self.lo, rhs.lo),
                hi: vaddq_f64(self.hi, rhs.hi),
            }
        }
    }
}

impl AddAssign for F64x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        unsafe {
            Self {
                lo: vsubq_f64(self.lo, rhs.lo),
                hi: vsubq_f64(self.hi, rhs.hi),
            }
        }
    }
}

impl Mul for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        unsafe {
            Self {
                lo: vmulq_f64(self.lo, rhs.lo),
                hi: vmulq_f64(self.hi, rhs.hi),
            }
        }
    }
}

impl Div for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        unsafe {
            Self {
                lo: vdivq_f64(self.lo, rhs.lo),
                hi: vdivq_f64(self.hi, rhs.hi),
            }
        }
    }
}
