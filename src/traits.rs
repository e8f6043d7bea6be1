use crate::aligned::AlignedBuffer;
use crate::error::Result;
use crate::kernels::{rms, scalar};

/// RMS reductions on slices, in SIMD and scalar flavours.
///
/// ```rust
/// use simdstat::SimdRms;
///
/// let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
///
/// let simd = data.simd_rms();
/// let scalar = data.scalar_rms();
/// assert!((simd - scalar).abs() < 1e-12);
///
/// let windows = data.simd_windowed_rms(4).unwrap();
/// assert_eq!(windows.len(), 3);
/// ```
pub trait SimdRms {
    /// Lane-interleaved RMS of the whole slice.
    fn simd_rms(&self) -> f64;

    /// Sequential RMS of the whole slice.
    fn scalar_rms(&self) -> f64;

    /// Lane-interleaved RMS of each `window`-sized chunk.
    fn simd_windowed_rms(&self, window: usize) -> Result<AlignedBuffer>;

    /// Sequential RMS of each `window`-sized chunk.
    fn scalar_windowed_rms(&self, window: usize) -> Vec<f64>;
}

impl SimdRms for [f64] {
    #[inline(always)]
    fn simd_rms(&self) -> f64 {
        rms::compute_rms_full(self)
    }

    #[inline(always)]
    fn scalar_rms(&self) -> f64 {
        scalar::scalar_rms_full(self)
    }

    #[inline(always)]
    fn simd_windowed_rms(&self, window: usize) -> Result<AlignedBuffer> {
        rms::compute_rms_windowed(self, window)
    }

    #[inline(always)]
    fn scalar_windowed_rms(&self, window: usize) -> Vec<f64> {
        scalar::scalar_rms_windowed(self, window)
    }
}
