//! AVX2 4-lane f64 vector.
//!
//! `F64x4` wraps an `__m256d` register. Partial loads and stores use the
//! masked `_mm256_maskload_pd` / `_mm256_maskstore_pd` instructions, which
//! zero the masked-off lanes on load and leave memory untouched on store.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::simd::traits::SimdLane;
use crate::LANE_COUNT;

/// AVX2 memory alignment requirement in bytes.
pub(crate) const AVX_ALIGNMENT: usize = 32;

/// AVX2 SIMD vector containing 4 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub struct F64x4 {
    pub(crate) elements: __m256d,
}

/// Lane mask selecting the low `size` lanes (1..=3).
#[inline(always)]
unsafe fn partial_mask(size: usize) -> __m256i {
    match size {
        1 => _mm256_setr_epi64x(-1, 0, 0, 0),
        2 => _mm256_setr_epi64x(-1, -1, 0, 0),
        3 => _mm256_setr_epi64x(-1, -1, -1, 0),
        _ => unreachable!("partial size must be in 1..{LANE_COUNT}"),
    }
}

/// Clears the sign bit of 4 packed f64 values.
#[inline(always)]
pub(crate) unsafe fn _mm256_abs_pd(f: __m256d) -> __m256d {
    const ABS_MASK_BITS: u64 = 0x7FFF_FFFF_FFFF_FFFF;
    let mask = _mm256_castsi256_pd(_mm256_set1_epi64x(ABS_MASK_BITS as i64));
    _mm256_and_pd(f, mask)
}

impl SimdLane for F64x4 {
    const ALIGNMENT: usize = AVX_ALIGNMENT;

    #[inline(always)]
    fn zero() -> Self {
        Self {
            elements: unsafe { _mm256_setzero_pd() },
        }
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { _mm256_set1_pd(value) },
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self {
        Self {
            elements: _mm256_load_pd(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        Self {
            elements: _mm256_loadu_pd(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store_aligned(&self, ptr: *mut f64) {
        _mm256_store_pd(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned(&self, ptr: *mut f64) {
        _mm256_storeu_pd(ptr, self.elements)
    }

    #[inline(always)]
    fn abs(&self) -> Self {
        Self {
            elements: unsafe { _mm256_abs_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn load_partial(slice: &[f64]) -> Self {
        debug_assert!(slice.len() < LANE_COUNT, "partial load must be < {LANE_COUNT}");

        if slice.is_empty() {
            return Self::zero();
        }

        unsafe {
            Self {
                elements: _mm256_maskload_pd(slice.as_ptr(), partial_mask(slice.len())),
            }
        }
    }

    #[inline(always)]
    fn store_partial(&self, out: &mut [f64]) {
        debug_assert!(out.len() < LANE_COUNT, "partial store must be < {LANE_COUNT}");

        if out.is_empty() {
            return;
        }

        unsafe { _mm256_maskstore_pd(out.as_mut_ptr(), partial_mask(out.len()), self.elements) }
    }
}

impl Add for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_add_pd(self.elements, rhs.elements) },
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
        Self {
            elements: unsafe { _mm256_sub_pd(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_mul_pd(self.elements, rhs.elements) },
        }
    }
}

impl Div for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_div_pd(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlignedBuffer;

    #[test]
    fn test_is_aligned_32_byte_boundary() {
        let buf = AlignedBuffer::new(8).unwrap();
        assert!(F64x4::is_aligned(buf.as_ptr()));
        assert!(!F64x4::is_aligned(buf[1..].as_ptr()));
    }

    #[test]
    fn test_load_store_roundtrip_unaligned() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0];
        let v = F64x4::load(&data[1..]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_masked_partial_load_zeroes_tail() {
        let data = [7.0, -8.0, 9.0];
        for size in 1..=3 {
            let lanes = F64x4::load_partial(&data[..size]).to_array();
            assert_eq!(&lanes[..size], &data[..size]);
            assert!(lanes[size..].iter().all(|&x| x == 0.0));
        }
    }

    #[test]
    fn test_masked_partial_store_leaves_memory() {
        let v = F64x4::splat(5.0);
        let mut out = [1.0; 4];
        v.store_partial(&mut out[..2]);
        assert_eq!(out, [5.0, 5.0, 1.0, 1.0]);
    }

    #[test]
    fn test_abs_clears_sign_bit() {
        let v = F64x4::load(&[-0.0, -1.5, 2.0, -f64::INFINITY]);
        let lanes = v.abs().to_array();
        assert_eq!(lanes[0].to_bits(), 0.0f64.to_bits());
        assert_eq!(&lanes[1..], &[1.5, 2.0, f64::INFINITY]);
    }
}
