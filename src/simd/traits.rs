//! The lane abstraction every kernel is written against.
//!
//! A [`SimdLane`] holds [`crate::LANE_COUNT`] packed `f64` values. Backends
//! only have to provide raw loads/stores, the arithmetic operators and a
//! sign-bit `abs`; slice-level loading, zero-padded partial loads and the
//! horizontal reduction are shared default methods, so every backend reduces
//! lanes in the same order.

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use crate::LANE_COUNT;

pub trait SimdLane:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
{
    /// Number of `f64` values in one batch.
    const LANE_COUNT: usize = LANE_COUNT;

    /// Alignment in bytes for which `load_aligned`/`store_aligned` are valid.
    const ALIGNMENT: usize;

    fn zero() -> Self;

    /// Broadcasts `value` to every lane.
    fn splat(value: f64) -> Self;

    #[inline(always)]
    fn is_aligned(ptr: *const f64) -> bool {
        (ptr as usize) % Self::ALIGNMENT == 0
    }

    /// # Safety
    ///
    /// `ptr` must be aligned to [`SimdLane::ALIGNMENT`] and point to at least
    /// `LANE_COUNT` readable `f64` values.
    unsafe fn load_aligned(ptr: *const f64) -> Self;

    /// # Safety
    ///
    /// `ptr` must point to at least `LANE_COUNT` readable `f64` values.
    unsafe fn load_unaligned(ptr: *const f64) -> Self;

    /// # Safety
    ///
    /// `ptr` must be aligned to [`SimdLane::ALIGNMENT`] and point to at least
    /// `LANE_COUNT` writable `f64` slots.
    unsafe fn store_aligned(&self, ptr: *mut f64);

    /// # Safety
    ///
    /// `ptr` must point to at least `LANE_COUNT` writable `f64` slots.
    unsafe fn store_unaligned(&self, ptr: *mut f64);

    /// Clears the sign bit of every lane (NaN payloads are preserved).
    fn abs(&self) -> Self;

    /// Loads the first `LANE_COUNT` values of `slice`, picking the aligned
    /// instruction when the address allows it.
    ///
    /// # Panics
    ///
    /// Panics if `slice` holds fewer than `LANE_COUNT` values.
    #[inline(always)]
    fn load(slice: &[f64]) -> Self {
        assert!(
            slice.len() >= Self::LANE_COUNT,
            "full lane load needs {} elements, got {}",
            Self::LANE_COUNT,
            slice.len()
        );

        let ptr = slice.as_ptr();
        match Self::is_aligned(ptr) {
            true => unsafe { Self::load_aligned(ptr) },
            false => unsafe { Self::load_unaligned(ptr) },
        }
    }

    /// Loads fewer than `LANE_COUNT` values; the missing lanes are `0.0`.
    #[inline(always)]
    fn load_partial(slice: &[f64]) -> Self {
        debug_assert!(
            slice.len() < Self::LANE_COUNT,
            "partial load must be shorter than {} elements",
            Self::LANE_COUNT
        );

        let mut temp = [0.0f64; LANE_COUNT];
        temp[..slice.len()].copy_from_slice(slice);
        unsafe { Self::load_unaligned(temp.as_ptr()) }
    }

    /// Writes all lanes to the first `LANE_COUNT` slots of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` holds fewer than `LANE_COUNT` slots.
    #[inline(always)]
    fn store_at(&self, out: &mut [f64]) {
        assert!(
            out.len() >= Self::LANE_COUNT,
            "full lane store needs {} slots, got {}",
            Self::LANE_COUNT,
            out.len()
        );

        let ptr = out.as_mut_ptr();
        match Self::is_aligned(ptr) {
            true => unsafe { self.store_aligned(ptr) },
            false => unsafe { self.store_unaligned(ptr) },
        }
    }

    /// Writes the low `out.len()` lanes (fewer than `LANE_COUNT`).
    #[inline(always)]
    fn store_partial(&self, out: &mut [f64]) {
        debug_assert!(
            out.len() < Self::LANE_COUNT,
            "partial store must be shorter than {} slots",
            Self::LANE_COUNT
        );

        let lanes = self.to_array();
        out.copy_from_slice(&lanes[..out.len()]);
    }

    #[inline(always)]
    fn to_array(&self) -> [f64; LANE_COUNT] {
        let mut lanes = [0.0f64; LANE_COUNT];
        unsafe { self.store_unaligned(lanes.as_mut_ptr()) };
        lanes
    }

    /// Sums the lanes in index order, starting from `0.0`.
    #[inline(always)]
    fn horizontal_sum(&self) -> f64 {
        self.to_array().iter().fold(0.0, |total, &lane| total + lane)
    }
}
