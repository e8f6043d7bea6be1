use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::simd::traits::SimdLane;
use crate::LANE_COUNT;

pub(crate) const FALLBACK_ALIGNMENT: usize = std::mem::align_of::<f64>();

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F64x4 {
    pub(crate) elements: [f64; LANE_COUNT],
}

impl F64x4 {
    #[inline(always)]
    fn zip_with(self, rhs: Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let mut elements = self.elements;
        for (lhs, &rhs) in elements.iter_mut().zip(rhs.elements.iter()) {
            *lhs = op(*lhs, rhs);
        }
        Self { elements }
    }
}

impl SimdLane for F64x4 {
    const ALIGNMENT: usize = FALLBACK_ALIGNMENT;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: [value; LANE_COUNT],
        }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self {
        Self::load_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        let mut elements = [0.0; LANE_COUNT];
        std::ptr::copy_nonoverlapping(ptr, elements.as_mut_ptr(), LANE_COUNT);
        Self { elements }
    }

    #[inline(always)]
    unsafe fn store_aligned(&self, ptr: *mut f64) {
        self.store_unaligned(ptr)
    }

    #[inline(always)]
    unsafe fn store_unaligned(&self, ptr: *mut f64) {
        std::ptr::copy_nonoverlapping(self.elements.as_ptr(), ptr, LANE_COUNT);
    }

    #[inline(always)]
    fn abs(&self) -> Self {
        Self {
            elements: self
                .elements
                .map(|x| f64::from_bits(x.to_bits() & !SIGN_MASK)),
        }
    }

    #[inline(always)]
    fn to_array(&self) -> [f64; LANE_COUNT] {
        self.elements
    }
}

impl Add for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
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
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Div for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a / b)
    }
}
