//! Aligned `f64` buffers for SIMD kernels.
//!
//! [`AlignedBuffer`] owns a heap block whose base address is a multiple of
//! [`BUFFER_ALIGNMENT`] and whose capacity is rounded up to a whole number of
//! lanes ([`LANE_COUNT`]), so every full lane batch a kernel loads from the
//! buffer stays inside the allocation. The padding slots are zero-initialised.
//!
//! # Example
//!
//! ```rust
//! use simdstat::AlignedBuffer;
//!
//! let mut buf = AlignedBuffer::new(10).unwrap();
//! assert_eq!(buf.len(), 10);
//! assert_eq!(buf.padded_len(), 12);
//! assert!(buf.is_aligned());
//!
//! buf[3] = 1.5;
//! assert_eq!(buf.as_padded_slice()[11], 0.0);
//! ```

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

use crate::error::{allocation_error, layout_error, Result};
use crate::{BUFFER_ALIGNMENT, LANE_COUNT};

/// Rounds an element count up to the next multiple of [`LANE_COUNT`].
///
/// Returns `None` when the rounded count does not fit in `usize`.
#[inline(always)]
pub fn round_up_to_lanes(len: usize) -> Option<usize> {
    len.checked_next_multiple_of(LANE_COUNT)
}

/// Returns `true` if `ptr` sits on a [`BUFFER_ALIGNMENT`] boundary.
#[inline(always)]
pub fn is_buffer_aligned(ptr: *const f64) -> bool {
    (ptr as usize) % BUFFER_ALIGNMENT == 0
}

/// A lane-padded, [`BUFFER_ALIGNMENT`]-aligned buffer of `f64`.
///
/// Dereferences to a slice of the logical length; the padding is reachable
/// through [`AlignedBuffer::as_padded_slice`]. Memory is released on drop.
pub struct AlignedBuffer {
    ptr: NonNull<f64>,
    len: usize,
    layout: Layout,
}

// SAFETY: the buffer exclusively owns its allocation and has no interior
// mutability; access goes through `&self` / `&mut self`.
unsafe impl Send for AlignedBuffer {}
unsafe impl Sync for AlignedBuffer {}

impl AlignedBuffer {
    /// Allocates a zeroed buffer holding `len` logical elements.
    ///
    /// The capacity is rounded up to a multiple of [`LANE_COUNT`]. A zero
    /// length performs no allocation.
    ///
    /// # Errors
    ///
    /// - [`SimdstatError::LayoutError`](crate::SimdstatError::LayoutError) if
    ///   the byte size overflows or exceeds `isize::MAX`
    /// - [`SimdstatError::AllocationError`](crate::SimdstatError::AllocationError)
    ///   if the allocator returns null
    pub fn new(len: usize) -> Result<Self> {
        let padded = round_up_to_lanes(len).ok_or_else(|| {
            layout_error(len, BUFFER_ALIGNMENT, "element count overflows when padded to lanes")
        })?;

        let size = padded.checked_mul(mem::size_of::<f64>()).ok_or_else(|| {
            layout_error(padded, BUFFER_ALIGNMENT, "byte size overflows usize")
        })?;

        let layout = Layout::from_size_align(size, BUFFER_ALIGNMENT)
            .map_err(|e| layout_error(size, BUFFER_ALIGNMENT, e.to_string()))?;

        if size == 0 {
            // SAFETY: BUFFER_ALIGNMENT is non-zero, the pointer is never read through.
            let ptr = unsafe { NonNull::new_unchecked(BUFFER_ALIGNMENT as *mut f64) };
            return Ok(Self { ptr, len, layout });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe { alloc_zeroed(layout) } as *mut f64;

        let ptr = match NonNull::new(raw) {
            Some(p) => p,
            None => {
                log::error!("aligned allocation of {size} bytes failed");
                return Err(allocation_error(
                    size,
                    BUFFER_ALIGNMENT,
                    "allocator returned a null pointer",
                ));
            }
        };

        log::trace!("allocated {padded} f64 slots ({size} bytes) at {raw:p}");

        Ok(Self { ptr, len, layout })
    }

    /// Allocates a buffer and copies `data` into its logical range.
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        let mut buf = Self::new(data.len())?;
        buf.copy_from_slice(data);
        Ok(buf)
    }

    /// Number of logical elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, always a multiple of [`LANE_COUNT`].
    #[inline(always)]
    pub fn padded_len(&self) -> usize {
        self.layout.size() / mem::size_of::<f64>()
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const f64 {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut f64 {
        self.ptr.as_ptr()
    }

    /// Returns `true` when the base address honours [`BUFFER_ALIGNMENT`].
    #[inline(always)]
    pub fn is_aligned(&self) -> bool {
        is_buffer_aligned(self.as_ptr())
    }

    /// The full allocation, padding included.
    #[inline(always)]
    pub fn as_padded_slice(&self) -> &[f64] {
        // SAFETY: `padded_len` zero-initialised f64 slots are owned by `self`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.padded_len()) }
    }

    /// Mutable view over the full allocation, padding included.
    #[inline(always)]
    pub fn as_padded_mut_slice(&mut self) -> &mut [f64] {
        // SAFETY: see `as_padded_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.padded_len()) }
    }

    /// Copies the logical elements into a `Vec` owned by the global allocator.
    pub fn into_vec(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        if self.layout.size() > 0 {
            log::trace!("releasing {} bytes at {:p}", self.layout.size(), self.ptr);
            // SAFETY: allocated in `new` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
        }
    }
}

impl Deref for AlignedBuffer {
    type Target = [f64];

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        // SAFETY: `len <= padded_len` initialised elements.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl DerefMut for AlignedBuffer {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: see `deref`.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("padded_len", &self.padded_len())
            .field("data", &self.deref())
            .finish()
    }
}
